//! Message dispatcher - Routes messages to commands and delivers the replies

use crate::application::errors::CommandError;
use crate::application::services::CommandService;
use crate::domain::entities::{Message, Reply, User};
use crate::domain::traits::Bot;
use super::parser::MessageParser;

/// Entry point the gateway event loop calls for every incoming message
pub struct MessageDispatcher {
    parser: MessageParser,
    commands: CommandService,
}

impl MessageDispatcher {
    pub fn new(commands: CommandService) -> Self {
        Self {
            parser: MessageParser::new(commands.prefix()),
            commands,
        }
    }

    pub fn commands(&self) -> &CommandService {
        &self.commands
    }

    /// Work out the replies for a message without sending anything
    pub fn process(&self, message: &Message) -> Vec<Reply> {
        match self.commands.handle(message) {
            Ok(replies) => replies,
            Err(CommandError::NotFound(name)) => {
                tracing::debug!("[{}] ignoring unknown command {}", message.chat_id, name);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("[{}] command failed: {}", message.chat_id, e);
                Vec::new()
            }
        }
    }

    /// Parse raw text from the gateway, then process and deliver it
    pub async fn dispatch<B>(&self, bot: &B, chat_id: &str, text: &str, sender: Option<User>) -> Vec<Reply>
    where
        B: Bot + ?Sized,
    {
        let message = self.parser.parse(chat_id, text, sender);
        self.deliver(bot, &message).await
    }

    /// Send every reply for `message` in order.
    ///
    /// The first failed send stops delivery. The author then gets one
    /// `DeliveryFailure` notice in place of the remaining replies; the failed
    /// reply itself is not retried. Returns the replies that were produced.
    pub async fn deliver<B>(&self, bot: &B, message: &Message) -> Vec<Reply>
    where
        B: Bot + ?Sized,
    {
        let replies = self.process(message);
        if replies.is_empty() {
            return replies;
        }

        tracing::debug!(
            "[{}] message {} from {} produced {} replies",
            message.chat_id, message.id, message.timestamp, replies.len()
        );

        let mention = message.author_mention();
        let mut produced = Vec::with_capacity(replies.len());
        for reply in replies {
            match bot.send_message(&message.chat_id, &reply.render(&mention)).await {
                Ok(id) => {
                    tracing::debug!("[{}] sent {}", message.chat_id, id);
                    produced.push(reply);
                }
                Err(e) => {
                    tracing::error!("[{}] failed to deliver reply: {}", message.chat_id, e);
                    let failure = Reply::delivery_failure();
                    if let Err(e) = bot.send_message(&message.chat_id, &failure.render(&mention)).await {
                        tracing::error!("[{}] failed to report delivery failure: {}", message.chat_id, e);
                    }
                    produced.push(failure);
                    break;
                }
            }
        }
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::application::dice::RollComposer;
    use crate::application::errors::BotError;
    use crate::domain::entities::{DiceLimits, ErrorKind};
    use crate::domain::traits::BotInfo;

    /// Records sends and fails the first `fail_first` of them
    struct RecordingBot {
        sent: Mutex<Vec<String>>,
        attempts: Mutex<usize>,
        fail_first: usize,
    }

    impl RecordingBot {
        fn new(fail_first: usize) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                attempts: Mutex::new(0),
                fail_first,
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }

        fn attempts(&self) -> usize {
            *self.attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn start(&self) -> Result<(), BotError> {
            Ok(())
        }

        async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            if *attempts <= self.fail_first {
                return Err(BotError::Network("connection reset".to_string()));
            }
            let mut sent = self.sent.lock().unwrap();
            sent.push(text.to_string());
            Ok(sent.len().to_string())
        }

        fn bot_info(&self) -> BotInfo {
            BotInfo {
                id: "test".to_string(),
                name: "test".to_string(),
                username: "test".to_string(),
            }
        }
    }

    fn dispatcher(limits: DiceLimits) -> MessageDispatcher {
        let mut commands = CommandService::new("!");
        commands.register_defaults(RollComposer::new(limits));
        MessageDispatcher::new(commands)
    }

    fn frank() -> Option<User> {
        Some(User::new("9").with_username("frank"))
    }

    #[tokio::test]
    async fn test_roll_is_delivered_with_mention() {
        let bot = RecordingBot::new(0);
        let replies = dispatcher(DiceLimits::default())
            .dispatch(&bot, "chat", "!roll 2d6+1", frank())
            .await;

        assert_eq!(replies.len(), 1);
        let sent = bot.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("@frank rolled:\n2d6+1: "));
    }

    #[tokio::test]
    async fn test_group_command_addressed_to_bot() {
        let bot = RecordingBot::new(0);
        let replies = dispatcher(DiceLimits::default())
            .dispatch(&bot, "-100", "/roll@diceroll_bot 2d6", frank())
            .await;

        assert_eq!(replies.len(), 1);
        assert!(bot.sent()[0].starts_with("@frank rolled:\n2d6: "));
    }

    #[tokio::test]
    async fn test_advisory_sent_before_reply() {
        let bot = RecordingBot::new(0);
        let text = format!("!roll {}", vec!["1d4"; 12].join(" "));
        dispatcher(DiceLimits::default()).dispatch(&bot, "chat", &text, frank()).await;

        let sent = bot.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].starts_with("Warning: @frank provided 12 dice"));
        assert!(sent[1].starts_with("@frank rolled:"));
    }

    #[tokio::test]
    async fn test_format_error_is_delivered() {
        let bot = RecordingBot::new(0);
        let replies = dispatcher(DiceLimits::default())
            .dispatch(&bot, "chat", "!roll 3d6 bad", frank())
            .await;

        assert_eq!(replies[0].kind(), Some(ErrorKind::FormatError));
        let sent = bot.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("Error: @frank provided invalid dice `bad`"));
        assert!(!sent[0].contains("3d6:"));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported_once() {
        let bot = RecordingBot::new(1);
        let replies = dispatcher(DiceLimits::default())
            .dispatch(&bot, "chat", "!roll 1d6", frank())
            .await;

        assert_eq!(replies, vec![Reply::delivery_failure()]);
        assert_eq!(bot.attempts(), 2);
        let sent = bot.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("Error: @frank "));
        assert!(!sent[0].contains("1d6:"));
    }

    #[tokio::test]
    async fn test_failed_advisory_skips_main_reply() {
        let bot = RecordingBot::new(2);
        let text = format!("!roll {}", vec!["1d4"; 11].join(" "));
        let replies = dispatcher(DiceLimits::default())
            .dispatch(&bot, "chat", &text, frank())
            .await;

        assert_eq!(replies, vec![Reply::delivery_failure()]);
        assert_eq!(bot.attempts(), 2);
        assert!(bot.sent().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_reply_never_sent() {
        let bot = RecordingBot::new(0);
        let limits = DiceLimits {
            max_message_length: 20,
            ..DiceLimits::default()
        };
        let replies = dispatcher(limits).dispatch(&bot, "chat", "!roll 20d6", frank()).await;

        assert_eq!(replies[0].kind(), Some(ErrorKind::MessageTooLong));
        let sent = bot.sent();
        assert_eq!(sent.len(), 1);
        assert!(!sent[0].contains("20d6:"));
    }

    #[tokio::test]
    async fn test_silent_inputs() {
        let bot = RecordingBot::new(0);
        let dispatcher = dispatcher(DiceLimits::default());
        for text in ["", "   ", "!roll-help", "!dance", "just chatting", "!"] {
            let replies = dispatcher.dispatch(&bot, "chat", text, frank()).await;
            assert!(replies.is_empty(), "{:?} produced {:?}", text, replies);
        }
        assert_eq!(bot.attempts(), 0);
    }
}
