pub mod card;
pub mod deck;
pub mod hand;
pub mod options;
pub mod rank;
pub mod score;
pub mod seat;
pub mod suit;
pub mod trick;
