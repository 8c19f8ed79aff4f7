pub mod bot;
pub mod policy;

pub use bot::{Phase, PlayMemory, SmartDecision, SmartPlanner};
pub use policy::{
    HumanInput, HumanPlayer, LegalPlayer, RandomPlayer, SelectionError, Seating, SmartPlayer,
    human_channel, make_player, make_players, new_game,
};
