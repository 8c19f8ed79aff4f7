use std::io::{BufRead, Write};
use std::thread::{self, JoinHandle};
use tracing::{Level, event};
use whist_bot::{HumanInput, SelectionError};
use whist_core::model::card::Card;
use whist_core::model::seat::Seat;

/// What happened to one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Submitted(Seat, Card),
    Unparsable,
    NobodyWaiting,
    Closed,
}

/// Routes each line read from `input` to whichever human seat is waiting.
///
/// Returns once input is exhausted or every seat has hung up.
pub fn feed_selections<R: BufRead, W: Write>(
    input: R,
    mut prompt: W,
    seats: &[(Seat, HumanInput)],
) -> Vec<LineOutcome> {
    let mut outcomes = Vec::new();
    for line in input.lines() {
        let Ok(line) = line else { break };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let outcome = submit_line(text, seats);
        match outcome {
            LineOutcome::Unparsable => {
                let _ = writeln!(prompt, "'{text}' is not a card; try e.g. QS or 10H");
            }
            LineOutcome::NobodyWaiting => {
                let _ = writeln!(prompt, "No one is waiting for a card right now");
            }
            LineOutcome::Submitted(..) | LineOutcome::Closed => {}
        }
        outcomes.push(outcome);
        if outcome == LineOutcome::Closed {
            break;
        }
    }
    outcomes
}

fn submit_line(text: &str, seats: &[(Seat, HumanInput)]) -> LineOutcome {
    let Ok(card) = text.parse::<Card>() else {
        return LineOutcome::Unparsable;
    };
    let Some((seat, input)) = seats.iter().find(|(_, input)| input.is_pending()) else {
        return LineOutcome::NobodyWaiting;
    };
    match input.submit(card) {
        Ok(()) => {
            event!(
                target: "whist_cli::human",
                Level::DEBUG,
                seat = seat.index(),
                card = %card,
                "selection submitted"
            );
            LineOutcome::Submitted(*seat, card)
        }
        Err(SelectionError::NotPending) => LineOutcome::NobodyWaiting,
        Err(SelectionError::Disconnected) => LineOutcome::Closed,
    }
}

/// Reads stdin on a background thread for the given human seats.
pub fn spawn_stdin_reader(seats: Vec<(Seat, HumanInput)>) -> JoinHandle<Vec<LineOutcome>> {
    thread::spawn(move || feed_selections(std::io::stdin().lock(), std::io::stdout(), &seats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use whist_bot::human_channel;
    use whist_core::game::{Player, TableView};
    use whist_core::model::hand::Hand;
    use whist_core::model::options::TurnDirection;
    use whist_core::model::score::ScoreBoard;
    use whist_core::model::suit::Suit;
    use whist_core::model::trick::Trick;
    use whist_core::rules::turn_order;

    #[test]
    fn lines_without_a_waiting_seat_are_refused() {
        let (_player, input) = human_channel();
        let mut prompt = Vec::new();
        let outcomes = feed_selections(
            Cursor::new("banana\n\nQS\n"),
            &mut prompt,
            &[(Seat::Zero, input)],
        );
        assert_eq!(
            outcomes,
            vec![LineOutcome::Unparsable, LineOutcome::NobodyWaiting]
        );
        let text = String::from_utf8(prompt).expect("utf8");
        assert!(text.contains("'banana' is not a card"));
    }

    #[test]
    fn answers_the_waiting_seat() {
        let (player, input) = human_channel();
        let hand = Hand::with_cards(vec!["2S".parse().unwrap()]);
        let trick = Trick::new(turn_order(Seat::Zero, TurnDirection::Clockwise));
        let scores = ScoreBoard::new();

        let seats = vec![(Seat::Zero, input)];
        let card = thread::scope(|scope| {
            let feeder = scope.spawn(|| {
                while !seats[0].1.is_pending() {
                    thread::sleep(std::time::Duration::from_millis(1));
                }
                feed_selections(Cursor::new("2S\n"), Vec::new(), &seats)
            });
            let mut player = player;
            let view = TableView {
                seat: Seat::Zero,
                hand: &hand,
                trick: &trick,
                trump: Suit::Hearts,
                scores: &scores,
            };
            let card = player.choose_card(&view, &mut StdRng::seed_from_u64(1));
            let outcomes = feeder.join().expect("feeder");
            assert_eq!(
                outcomes,
                vec![LineOutcome::Submitted(Seat::Zero, "2S".parse().unwrap())]
            );
            card
        });
        assert_eq!(card, "2S".parse::<Card>().unwrap());

        // Nothing is pending once the turn has been answered.
        assert_eq!(
            feed_selections(Cursor::new("3S\n"), Vec::new(), &seats),
            vec![LineOutcome::NobodyWaiting]
        );
    }
}
