use std::path::PathBuf;

use clap::Parser;

use whist_cli::config::WhistConfig;
use whist_cli::logging::init_logging;
use whist_cli::runner::{RunSettings, run_batch};
use whist_core::AppInfo;
use whist_core::model::seat::Seat;

/// Four-player trick-taking Whist at the terminal.
#[derive(Debug, Parser)]
#[command(name = "whist", author, version, about = "Play or simulate four-player Whist")]
struct Cli {
    /// Path to a YAML or legacy `.properties` configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of games to play back to back.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    games: usize,

    /// Override the score that ends a game.
    #[arg(long, value_name = "SCORE")]
    win_score: Option<u32>,

    /// Write every game event as JSON lines to this file.
    #[arg(long, value_name = "FILE")]
    transcript: Option<PathBuf>,

    /// Only print the final tally.
    #[arg(short, long)]
    quiet: bool,

    /// Exit after validating the configuration (no game is played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        println!("{} {}", AppInfo::name(), AppInfo::version());
    }
    let mut config = match &cli.config {
        Some(path) => WhistConfig::from_path(path)?,
        None => WhistConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }

    if let Some(win_score) = cli.win_score {
        config.game.win_score = win_score;
    }

    let options = config.game.options()?;
    let players = options
        .player_types
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Loaded configuration: players [{players}], {} cards per hand, first to {}",
        options.hand_size, options.win_score
    );

    if cli.validate_only {
        println!("Validation-only mode: no game played.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;
    let settings = RunSettings {
        options,
        games: cli.games,
        transcript: cli.transcript,
        quiet: cli.quiet,
    };
    let summary = run_batch(&settings)?;

    println!(
        "Played {} game{} ({} aborted on rule violations, {} tricks)",
        summary.games(),
        if summary.games() == 1 { "" } else { "s" },
        summary.aborted,
        summary.tricks_played()
    );
    for seat in Seat::LOOP {
        println!("  Player {seat}: {} wins", summary.wins[seat.index()]);
    }
    if let (Some(path), Some(events)) = (settings.transcript.as_ref(), summary.transcript_events) {
        println!("Transcript: {events} events at {}", path.display());
    }

    Ok(())
}
