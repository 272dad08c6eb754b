//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming messages into structured Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();

        if text.trim().is_empty() {
            return Message::new(chat_id, Content::Empty).with_sender_opt(sender);
        }

        // Check if it's a command
        let trimmed = text.trim_start();
        if trimmed.starts_with('/') || trimmed.starts_with(&self.command_prefix) {
            return self.parse_command(chat_id, trimmed, sender);
        }

        // Regular text message
        Message::new(chat_id, Content::Text(text)).with_sender_opt(sender)
    }

    /// Parse a command message
    fn parse_command(&self, chat_id: String, text: &str, sender: Option<User>) -> Message {
        // Remove the command prefix (either / or custom prefix)
        let cmd_text = match text.strip_prefix(self.command_prefix.as_str()) {
            Some(rest) => rest,
            None => text.trim_start_matches('/'),
        };

        // Split command and arguments
        let mut parts = cmd_text.split_whitespace();
        // Group chats address commands as `roll@bot_username`
        let name = parts.next().map(|n| n.split_once('@').map_or(n, |(name, _)| name));
        let content = match name {
            // A bare prefix, or a prefix followed by whitespace, names no command
            Some(name) if !name.is_empty() && !cmd_text.starts_with(char::is_whitespace) => Content::Command {
                name: name.to_string(),
                args: parts.map(|s| s.to_string()).collect(),
            },
            _ => Content::Empty,
        };

        Message::new(chat_id, content).with_sender_opt(sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chat", "!roll  3d6   1d20+2", None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "roll".to_string(),
                args: vec!["3d6".to_string(), "1d20+2".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_slash_command() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chat", "/roll-help", Some(User::new("1")));
        assert_eq!(
            msg.content,
            Content::Command { name: "roll-help".to_string(), args: vec![] }
        );
        assert_eq!(msg.sender.map(|u| u.id), Some("1".to_string()));
    }

    #[test]
    fn test_parse_blank_and_bare_prefix() {
        let parser = MessageParser::new("!");
        assert_eq!(parser.parse("chat", "", None).content, Content::Empty);
        assert_eq!(parser.parse("chat", "   \t", None).content, Content::Empty);
        assert_eq!(parser.parse("chat", "!", None).content, Content::Empty);
        assert_eq!(parser.parse("chat", "! roll", None).content, Content::Empty);
    }

    #[test]
    fn test_parse_command_addressed_to_bot() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chat", "/roll@diceroll_bot 2d6", None);
        assert_eq!(
            msg.content,
            Content::Command { name: "roll".to_string(), args: vec!["2d6".to_string()] }
        );
        assert_eq!(parser.parse("chat", "/@diceroll_bot 2d6", None).content, Content::Empty);
    }

    #[test]
    fn test_parse_leading_whitespace() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chat", "  !roll 2d4", None);
        assert!(msg.content.is_command());
    }

    #[test]
    fn test_parse_plain_text() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chat", "roll 3d6", None);
        assert_eq!(msg.content.text(), Some("roll 3d6"));
        assert!(!msg.content.is_command());
    }
}
