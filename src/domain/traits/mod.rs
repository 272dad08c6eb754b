//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod random;

pub use bot::{Bot, BotInfo};
pub use random::RandomSource;
