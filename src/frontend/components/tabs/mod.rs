//! Dashboard tab content components.

pub mod configuration;
pub mod create_bot;
pub mod my_bots;

pub use configuration::Configuration;
pub use create_bot::CreateBot;
pub use my_bots::MyBots;
