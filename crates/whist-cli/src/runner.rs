use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{Level, event};
use whist_bot::new_game;
use whist_core::game::GameError;
use whist_core::model::card::Card;
use whist_core::model::options::{GameOptions, PlayerType};
use whist_core::model::seat::{SEAT_COUNT, Seat};

use crate::console::ConsoleObserver;
use crate::human::spawn_stdin_reader;
use crate::transcript::TranscriptWriter;

/// Everything needed to play one or more games back to back.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub options: GameOptions,
    pub games: usize,
    pub transcript: Option<PathBuf>,
    /// Suppress the table printout.
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameResult {
    Won {
        winner: Seat,
        scores: [u32; SEAT_COUNT],
        tricks_played: usize,
    },
    Aborted {
        seat: Seat,
        card: Card,
        tricks_played: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub wins: [usize; SEAT_COUNT],
    pub aborted: usize,
    pub results: Vec<GameResult>,
    pub transcript_events: Option<usize>,
}

impl BatchSummary {
    pub fn games(&self) -> usize {
        self.results.len()
    }

    pub fn tricks_played(&self) -> usize {
        self.results
            .iter()
            .map(|result| match result {
                GameResult::Won { tricks_played, .. } | GameResult::Aborted { tricks_played, .. } => {
                    *tricks_played
                }
            })
            .sum()
    }
}

/// Options for game `index` of a batch: seeded runs advance the seed by one
/// per game so every game is distinct yet reproducible.
pub fn options_for_game(base: &GameOptions, index: usize) -> GameOptions {
    let mut options = base.clone();
    options.seed = base.seed.map(|seed| seed.wrapping_add(index as u64));
    options
}

pub fn run_batch(settings: &RunSettings) -> Result<BatchSummary> {
    if settings.games == 0 {
        bail!("at least one game must be played");
    }
    let has_human = settings.options.player_types.contains(&PlayerType::Human);
    if has_human && settings.games > 1 {
        bail!("human seats can only play a single game, not {}", settings.games);
    }

    let mut transcript = match &settings.transcript {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating transcript at {}", path.display()))?;
            Some(TranscriptWriter::new(BufWriter::new(file)))
        }
        None => None,
    };

    let mut summary = BatchSummary {
        wins: [0; SEAT_COUNT],
        aborted: 0,
        results: Vec::with_capacity(settings.games),
        transcript_events: None,
    };

    for index in 0..settings.games {
        let options = options_for_game(&settings.options, index);
        let console = (!settings.quiet).then(|| ConsoleObserver::stdout(options.player_types));
        let observer = (console, transcript.as_mut());

        let (mut game, humans) = new_game(options, observer)
            .with_context(|| format!("setting up game {}", index + 1))?;
        if !humans.is_empty() {
            // Detached: the reader blocks on stdin until the process exits.
            let _reader = spawn_stdin_reader(humans);
        }

        let result = match game.play() {
            Ok(outcome) => {
                summary.wins[outcome.winner.index()] += 1;
                GameResult::Won {
                    winner: outcome.winner,
                    scores: outcome.scores,
                    tricks_played: outcome.tricks_played,
                }
            }
            Err(GameError::RuleViolation { seat, card }) => {
                summary.aborted += 1;
                event!(
                    target: "whist_cli::runner",
                    Level::WARN,
                    game = index + 1,
                    seat = seat.index(),
                    card = %card,
                    "game aborted on rule violation"
                );
                GameResult::Aborted {
                    seat,
                    card,
                    tricks_played: game.tricks_played(),
                }
            }
            Err(err) => {
                return Err(err).with_context(|| format!("playing game {}", index + 1));
            }
        };

        if !settings.quiet {
            println!("{}", describe(&result));
        }
        summary.results.push(result);
    }

    if let Some(transcript) = transcript {
        summary.transcript_events = Some(transcript.events_written());
        transcript.finish().context("writing transcript")?;
    }

    event!(
        target: "whist_cli::runner",
        Level::INFO,
        games = summary.games(),
        aborted = summary.aborted,
        tricks = summary.tricks_played(),
        "batch complete"
    );
    Ok(summary)
}

pub fn describe(result: &GameResult) -> String {
    match result {
        GameResult::Won {
            winner,
            scores,
            tricks_played,
        } => format!(
            "Player {winner} wins with {} tricks after {tricks_played} tricks (scores {scores:?})",
            scores[winner.index()]
        ),
        GameResult::Aborted { seat, card, .. } => {
            format!("Game aborted: player {seat} broke suit with {card}")
        }
    }
}
