//! Platform adapters - gateways between a chat platform and the dispatcher

pub mod console;
pub mod telegram;

pub use console::ConsoleAdapter;
pub use telegram::TelegramAdapter;
