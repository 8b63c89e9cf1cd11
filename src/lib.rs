pub mod args;
pub mod config;
pub mod logging;
pub mod quiz;
pub mod trivia;
pub mod ui;
