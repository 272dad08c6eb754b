//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Dice: Notation parsing, roll evaluation, reply composition
//! - Services: Command registry and execution
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and dispatching

pub mod dice;
pub mod errors;
pub mod services;
pub mod messaging;
