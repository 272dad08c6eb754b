//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Random: Operating system randomness
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod random;
pub mod adapters;
