use crate::game::error::GameError;
use crate::game::observer::{GameObserver, NullObserver};
use crate::game::player::{Player, TableView};
use crate::model::card::Card;
use crate::model::deck::deal_out;
use crate::model::hand::Hand;
use crate::model::options::{GameOptions, LeadingPlayer};
use crate::model::score::ScoreBoard;
use crate::model::seat::{SEAT_COUNT, Seat};
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use crate::rules::{can_follow, turn_order};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Hands are exhausted (or not yet dealt); the next trick starts with a deal.
    AwaitingDeal,
    TrickInProgress,
    TrickResolved,
    RoundsComplete,
    /// A rule violation ended the game without a winner.
    Aborted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrickReport {
    pub trick: Trick,
    pub trump: Suit,
    pub winner: Seat,
    pub winning_card: Card,
    pub winner_score: u32,
    /// Set when this trick brought a seat to the win score.
    pub game_winner: Option<Seat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Seat,
    pub scores: [u32; SEAT_COUNT],
    pub tricks_played: usize,
    pub deals: usize,
}

struct SeatState {
    hand: Hand,
    player: Box<dyn Player>,
}

/// Drives deals and tricks until a seat reaches the win score.
pub struct Game<O: GameObserver = NullObserver> {
    options: GameOptions,
    rng: StdRng,
    seats: [SeatState; SEAT_COUNT],
    scores: ScoreBoard,
    trump: Option<Suit>,
    leader: Option<Seat>,
    last_trick: Option<Trick>,
    tricks_played: usize,
    deals: usize,
    phase: GamePhase,
    started: bool,
    observer: O,
}

impl Game<NullObserver> {
    pub fn new(
        options: GameOptions,
        players: [Box<dyn Player>; SEAT_COUNT],
    ) -> Result<Self, GameError> {
        Self::with_observer(options, players, NullObserver)
    }
}

impl<O: GameObserver> Game<O> {
    pub fn with_observer(
        options: GameOptions,
        players: [Box<dyn Player>; SEAT_COUNT],
        observer: O,
    ) -> Result<Self, GameError> {
        options.validate()?;
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let seats = players.map(|player| SeatState {
            hand: Hand::new(),
            player,
        });

        Ok(Self {
            options,
            rng,
            seats,
            scores: ScoreBoard::new(),
            trump: None,
            leader: None,
            last_trick: None,
            tricks_played: 0,
            deals: 0,
            phase: GamePhase::AwaitingDeal,
            started: false,
            observer,
        })
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.seats[seat.index()].hand
    }

    /// The seat that leads the next trick, once play has started.
    pub fn leader(&self) -> Option<Seat> {
        self.leader
    }

    pub fn last_trick(&self) -> Option<&Trick> {
        self.last_trick.as_ref()
    }

    pub fn tricks_played(&self) -> usize {
        self.tricks_played
    }

    pub fn deals(&self) -> usize {
        self.deals
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            GamePhase::RoundsComplete => self.scores.winner_at(self.options.win_score),
            _ => None,
        }
    }

    /// Plays tricks until a seat reaches the win score.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            let report = self.play_trick()?;
            if let Some(winner) = report.game_winner {
                return Ok(GameOutcome {
                    winner,
                    scores: *self.scores.standings(),
                    tricks_played: self.tricks_played,
                    deals: self.deals,
                });
            }
        }
    }

    /// Plays exactly one trick, dealing first when the hands are exhausted.
    pub fn play_trick(&mut self) -> Result<TrickReport, GameError> {
        if matches!(self.phase, GamePhase::RoundsComplete | GamePhase::Aborted) {
            return Err(GameError::Finished);
        }

        if !self.started {
            self.start();
        }

        if self.tricks_played % self.options.hand_size == 0 {
            self.deal()?;
        }

        let leader = self.leader.unwrap_or(Seat::Zero);
        let trump = self.current_trump();
        let mut trick = Trick::new(turn_order(leader, self.options.direction));
        self.phase = GamePhase::TrickInProgress;
        self.observer.on_new_trick();

        for seat in trick.order() {
            self.observer.on_player_turn(seat);
            let card = match self.take_turn(seat, &trick, trump) {
                Ok(card) => card,
                Err(err) => {
                    self.phase = GamePhase::Aborted;
                    return Err(err);
                }
            };
            trick.play(seat, card)?;
            self.observer.on_card_played(seat, card);
        }

        let winning = trick
            .winner(trump)
            .expect("complete trick always has a winner");
        let winner_score = self.scores.award_trick(winning.seat);
        self.leader = Some(winning.seat);
        self.tricks_played += 1;
        self.phase = GamePhase::TrickResolved;

        event!(
            target: "whist_core::game",
            Level::DEBUG,
            trick = self.tricks_played,
            trump = %trump,
            winner = winning.seat.index(),
            card = %winning.card,
            score = winner_score,
        );
        self.observer.on_trick_won(winning.seat, winner_score);

        for state in &mut self.seats {
            state.player.on_trick_end(&trick);
        }

        let game_winner = self.scores.winner_at(self.options.win_score);
        if let Some(seat) = game_winner {
            self.phase = GamePhase::RoundsComplete;
            event!(
                target: "whist_core::game",
                Level::INFO,
                winner = seat.index(),
                score = self.scores.score(seat),
                tricks = self.tricks_played,
                deals = self.deals,
                "game complete"
            );
        } else if self.tricks_played % self.options.hand_size == 0 {
            self.phase = GamePhase::AwaitingDeal;
        }

        let report = TrickReport {
            trick: trick.clone(),
            trump,
            winner: winning.seat,
            winning_card: winning.card,
            winner_score,
            game_winner,
        };
        self.last_trick = Some(trick);
        Ok(report)
    }

    fn start(&mut self) {
        self.observer.on_game_reset();
        let leader = match self.options.leading_player {
            LeadingPlayer::Seat(seat) => seat,
            LeadingPlayer::Random => Seat::LOOP[self.rng.gen_range(0..SEAT_COUNT)],
        };
        self.leader = Some(leader);
        self.started = true;
    }

    fn deal(&mut self) -> Result<(), GameError> {
        let deal = deal_out(&mut self.rng, SEAT_COUNT, self.options.hand_size, true)?;
        for (seat, (state, hand)) in Seat::LOOP
            .iter()
            .copied()
            .zip(self.seats.iter_mut().zip(deal.hands))
        {
            state.hand = hand;
            state.player.receive_hand(seat, &state.hand);
        }
        for seat in Seat::LOOP {
            self.observer
                .on_hand_dealt(seat, &self.seats[seat.index()].hand);
        }

        let trump = Suit::ALL[self.rng.gen_range(0..Suit::ALL.len())];
        self.trump = Some(trump);
        self.deals += 1;
        event!(
            target: "whist_core::game",
            Level::DEBUG,
            deal = self.deals,
            trump = %trump,
            leftover = deal.leftover.len(),
            "hands dealt"
        );
        self.observer.on_trump_chosen(trump);
        Ok(())
    }

    fn current_trump(&self) -> Suit {
        self.trump.expect("trump is chosen with every deal")
    }

    /// Asks `seat` for a card, checks it, and removes it from the hand.
    fn take_turn(&mut self, seat: Seat, trick: &Trick, trump: Suit) -> Result<Card, GameError> {
        let state = &mut self.seats[seat.index()];
        let view = TableView {
            seat,
            hand: &state.hand,
            trick,
            trump,
            scores: &self.scores,
        };
        let card = state.player.choose_card(&view, &mut self.rng);

        if !state.hand.contains(card) {
            event!(
                target: "whist_core::game",
                Level::ERROR,
                seat = seat.index(),
                card = %card,
                "player chose a card it does not hold"
            );
            return Err(GameError::CardNotInHand { seat, card });
        }

        if self.options.enforce_rules && !can_follow(&state.hand, card, trick) {
            event!(
                target: "whist_core::game",
                Level::WARN,
                seat = seat.index(),
                card = %card,
                lead = ?trick.lead_suit(),
                "follow rule broken"
            );
            return Err(GameError::RuleViolation { seat, card });
        }

        state.hand.remove(card);
        Ok(card)
    }
}
