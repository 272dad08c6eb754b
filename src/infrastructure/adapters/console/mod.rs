//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::entities::User;
use crate::domain::traits::{Bot, BotInfo};

const CHAT_ID: &str = "console";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    user: User,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: name.into(),
                username: "console".to_string(),
            },
            user: User::new("console").with_first_name("you"),
        }
    }

    /// Read commands from stdin until EOF, dispatching each line
    pub async fn run(&self, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
        self.start().await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| BotError::Internal(format!("Failed to read stdin: {}", e)))?
        {
            dispatcher.dispatch(self, CHAT_ID, &line, Some(self.user.clone())).await;
        }

        tracing::info!("Console closed, shutting down");
        Ok(())
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode), type !roll 3d6");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
