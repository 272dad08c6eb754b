use crate::application::dice::RollComposer;
use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandRegistry, CommandRequest, Content, Message, Reply};
use crate::infrastructure::random::OsRandom;

/// Service for managing and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self, composer: RollComposer) {
        let usage = format!("{}roll [<x>d<y>[(+|-)<z>] ...]", self.prefix);
        self.register(Command::new("roll")
            .with_description("Roll dice")
            .with_usage(usage)
            .with_handler(move |msg| {
                let request = CommandRequest::from_message(msg)?;
                // OsRandom holds no state, so every invocation draws independently
                Ok(composer.compose(&request, &mut OsRandom).into_replies())
            }));

        // Reserved name, intentionally silent for now
        self.register(Command::new("roll-help")
            .with_description("Reserved")
            .with_handler(|_| Ok(Vec::new())));
    }

    pub fn handle(&self, message: &Message) -> Result<Vec<Reply>, CommandError> {
        let Content::Command { name, .. } = &message.content else {
            return Ok(Vec::new());
        };

        let cmd = self.registry.find(name)
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        match &cmd.handler {
            Some(handler) => handler(message),
            None => Ok(Vec::new()),
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.registry.all()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
