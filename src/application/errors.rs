//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Dice notation errors, raised by the notation parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("provided invalid dice `{0}`. Valid format is <x>d<y>[(+|-)<z>].")]
    Format(String),

    #[error("provided dice `{token}` outside the allowed range. Use between 1 and {max_count} dice with between 1 and {max_sides} sides.")]
    Value {
        token: String,
        max_count: u32,
        max_sides: u32,
    },
}

impl RollError {
    /// The token that caused the error, as the user typed it
    pub fn token(&self) -> &str {
        match self {
            RollError::Format(token) => token,
            RollError::Value { token, .. } => token,
        }
    }
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
