//! diceroll-bot - a chat bot that rolls dice written in `<x>d<y>[(+|-)<z>]` notation

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::dice::RollComposer;
pub use application::errors::{BotError, CommandError, ConfigError, RollError};
pub use domain::entities::{CommandRequest, Composition, DiceLimits, ErrorKind, ParsedRoll, Reply, RollResult};
pub use domain::traits::RandomSource;
