mod human;
mod legal;
mod random;
mod smart;

pub use human::{HumanInput, HumanPlayer, SelectionError, human_channel};
pub use legal::LegalPlayer;
pub use random::RandomPlayer;
pub use smart::SmartPlayer;

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{Level, event};
use whist_core::game::{Game, GameError, GameObserver, Player, TableView};
use whist_core::model::card::Card;
use whist_core::model::options::{GameOptions, PlayerType};
use whist_core::model::seat::{SEAT_COUNT, Seat};

pub(crate) fn pick_uniform(cards: &[Card], rng: &mut dyn RngCore) -> Card {
    *cards
        .choose(rng)
        .expect("hand is not empty on this seat's turn")
}

pub(crate) fn log_play_decision(view: &TableView<'_>, kind: PlayerType, card: Card, reason: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    event!(
        target: "whist_bot::play",
        Level::DEBUG,
        seat = view.seat.index(),
        player = kind.as_str(),
        card = %card,
        reason,
        leading = view.is_leading(),
        trump = %view.trump,
        hand_size = view.hand.len(),
        score = view.own_score(),
    );
}

/// Builds the player for `kind`. Human seats also return the handle that
/// feeds them selections.
pub fn make_player(kind: PlayerType) -> (Box<dyn Player>, Option<HumanInput>) {
    match kind {
        PlayerType::Random => (Box::new(RandomPlayer::new()), None),
        PlayerType::Legal => (Box::new(LegalPlayer::new()), None),
        PlayerType::Smart => (Box::new(SmartPlayer::new()), None),
        PlayerType::Human => {
            let (player, input) = human_channel();
            (Box::new(player), Some(input))
        }
    }
}

/// Players for a full table, plus input handles for any human seats.
pub struct Seating {
    pub players: [Box<dyn Player>; SEAT_COUNT],
    pub human_inputs: Vec<(Seat, HumanInput)>,
}

pub fn make_players(kinds: &[PlayerType; SEAT_COUNT]) -> Seating {
    let mut human_inputs = Vec::new();
    let players = std::array::from_fn(|index| {
        let (player, input) = make_player(kinds[index]);
        if let Some(input) = input {
            human_inputs.push((Seat::LOOP[index], input));
        }
        player
    });
    Seating {
        players,
        human_inputs,
    }
}

/// Seats the players named by `options` and returns a ready game.
pub fn new_game<O: GameObserver>(
    options: GameOptions,
    observer: O,
) -> Result<(Game<O>, Vec<(Seat, HumanInput)>), GameError> {
    let Seating {
        players,
        human_inputs,
    } = make_players(&options.player_types);
    let game = Game::with_observer(options, players, observer)?;
    Ok((game, human_inputs))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use whist_core::game::{EventLog, GamePhase};
    use whist_core::model::hand::Hand;
    use whist_core::model::options::TurnDirection;
    use whist_core::model::score::ScoreBoard;
    use whist_core::model::suit::Suit;
    use whist_core::model::trick::Trick;
    use whist_core::rules::turn_order;

    pub(crate) fn hand(cards: &[&str]) -> Hand {
        Hand::with_cards(cards.iter().map(|c| c.parse().unwrap()).collect())
    }

    /// Trick led by seat zero clockwise with `played` already on the table.
    pub(crate) fn table(played: &[&str]) -> (Trick, ScoreBoard) {
        let mut trick = Trick::new(turn_order(Seat::Zero, TurnDirection::Clockwise));
        for (seat, text) in trick.order().into_iter().zip(played) {
            trick.play(seat, text.parse().unwrap()).unwrap();
        }
        (trick, ScoreBoard::new())
    }

    pub(crate) fn view<'a>(
        hand: &'a Hand,
        trick: &'a Trick,
        scores: &'a ScoreBoard,
    ) -> TableView<'a> {
        TableView {
            seat: trick.expected_seat().unwrap_or(Seat::Zero),
            hand,
            trick,
            trump: Suit::Clubs,
            scores,
        }
    }

    #[test]
    fn factory_matches_requested_kind() {
        for kind in [
            PlayerType::Random,
            PlayerType::Legal,
            PlayerType::Human,
            PlayerType::Smart,
        ] {
            let (player, input) = make_player(kind);
            assert_eq!(player.kind(), kind);
            assert_eq!(input.is_some(), kind == PlayerType::Human);
        }
    }

    #[test]
    fn seating_collects_human_inputs_by_seat() {
        let seating = make_players(&[
            PlayerType::Smart,
            PlayerType::Human,
            PlayerType::Legal,
            PlayerType::Human,
        ]);
        let seats: Vec<Seat> = seating.human_inputs.iter().map(|(seat, _)| *seat).collect();
        assert_eq!(seats, vec![Seat::One, Seat::Three]);
        assert_eq!(seating.players[0].kind(), PlayerType::Smart);
        assert_eq!(seating.players[2].kind(), PlayerType::Legal);
    }

    #[test]
    fn new_game_plays_to_completion() {
        let options = GameOptions {
            seed: Some(11),
            win_score: 3,
            player_types: [
                PlayerType::Smart,
                PlayerType::Legal,
                PlayerType::Smart,
                PlayerType::Legal,
            ],
            ..GameOptions::default()
        };
        let (mut game, inputs) = new_game(options, EventLog::new()).unwrap();
        assert!(inputs.is_empty());
        let outcome = game.play().unwrap();
        assert_eq!(outcome.scores[outcome.winner.index()], 3);
        assert_eq!(game.phase(), GamePhase::RoundsComplete);
    }

    #[test]
    fn new_game_rejects_bad_options() {
        let options = GameOptions {
            hand_size: 0,
            ..GameOptions::default()
        };
        assert!(matches!(
            new_game(options, EventLog::new()),
            Err(GameError::Options(_))
        ));
    }
}
