use std::collections::HashMap;

use super::{Content, Message, Reply};
use crate::application::errors::CommandError;

/// A single command invocation, detached from the platform message it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Opaque author token, only ever used for formatting
    pub author: String,
    /// Dice notation tokens in the order the user typed them
    pub tokens: Vec<String>,
}

impl CommandRequest {
    pub fn new(author: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            author: author.into(),
            tokens,
        }
    }

    pub fn from_message(message: &Message) -> Result<Self, CommandError> {
        let Content::Command { args, .. } = &message.content else {
            return Err(CommandError::InvalidArgs("message is not a command".to_string()));
        };
        Ok(Self::new(message.author_mention(), args.clone()))
    }
}

/// Command handler function type
pub type CommandHandler = Box<dyn Fn(&Message) -> Result<Vec<Reply>, CommandError> + Send + Sync>;

/// Represents a bot command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub handler: Option<CommandHandler>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            usage: None,
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Message) -> Result<Vec<Reply>, CommandError> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// One-line help entry, e.g. `!roll - Roll dice (usage: ...)`
    pub fn summary(&self, prefix: &str) -> String {
        let mut line = format!("{}{}", prefix, self.name);
        if let Some(desc) = &self.description {
            line.push_str(&format!(" - {}", desc));
        }
        if let Some(usage) = &self.usage {
            line.push_str(&format!(" (usage: {})", usage));
        }
        line
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name.to_lowercase() == input.to_lowercase()
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.clone(), command);
    }

    pub fn find(&self, input: &str) -> Option<&Command> {
        self.commands.values().find(|c| c.matches(input))
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
