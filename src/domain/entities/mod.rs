//! Domain entities - Core objects with no platform dependencies

pub mod user;
pub mod message;
pub mod command;
pub mod dice;
pub mod reply;

pub use user::User;
pub use message::{Message, Content};
pub use command::{Command, CommandHandler, CommandRegistry, CommandRequest};
pub use dice::{DiceLimits, ParsedRoll, RollResult};
pub use reply::{Composition, ErrorKind, Reply};
