pub mod config;
pub mod console;
pub mod human;
pub mod logging;
pub mod runner;
pub mod transcript;
