//! Domain layer - Core dice logic with no platform dependencies
//! 
//! This layer contains:
//! - Entities: Core objects (User, Message, Command, ParsedRoll, Reply)
//! - Traits: Abstractions for infrastructure (Bot, RandomSource)

pub mod entities;
pub mod traits;
