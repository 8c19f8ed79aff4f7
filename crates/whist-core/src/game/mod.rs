pub mod engine;
pub mod error;
pub mod observer;
pub mod player;

pub use engine::{Game, GameOutcome, GamePhase, TrickReport};
pub use error::GameError;
pub use observer::{EventLog, GameEvent, GameObserver, NullObserver};
pub use player::{Player, TableView};
