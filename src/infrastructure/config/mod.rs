//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::domain::entities::DiceLimits;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub dice: DiceConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

/// Limits applied to every roll command
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiceConfig {
    pub max_dice_args: usize,
    pub max_dice_count: u32,
    pub max_dice_sides: u32,
    pub max_message_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "diceroll-bot".to_string(),
            prefix: "!".to_string(),
        }
    }
}

impl Default for DiceConfig {
    fn default() -> Self {
        let limits = DiceLimits::default();
        Self {
            max_dice_args: limits.max_dice_args,
            max_dice_count: limits.max_dice_count,
            max_dice_sides: limits.max_dice_sides,
            max_message_length: limits.max_message_length,
        }
    }
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self {
            telegram: Some(TelegramConfig {
                enabled: false,
                token: None,
            }),
            console: Some(ConsoleConfig {
                enabled: true,
            }),
        }
    }
}

/// Read an environment variable, treating an empty or blank value as unset
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env()
    }

    /// Apply environment variable overrides
    pub fn with_env(mut self) -> Self {
        if let Some(token) = non_empty_var("DICEROLL_BOT_TOKEN") {
            let tg = self.adapters.telegram.get_or_insert_with(TelegramConfig::default);
            tg.token = Some(token);
            tg.enabled = true;
        }

        if let Some(prefix) = non_empty_var("DICEROLL_PREFIX") {
            self.bot.prefix = prefix;
        }

        self
    }

    /// Check that the loaded values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }

        let dice = &self.dice;
        let limits = [
            ("dice.max-dice-args", dice.max_dice_args as u64),
            ("dice.max-dice-count", u64::from(dice.max_dice_count)),
            ("dice.max-dice-sides", u64::from(dice.max_dice_sides)),
            ("dice.max-message-length", dice.max_message_length as u64),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::InvalidValue(format!("{} must be at least 1", name)));
            }
        }

        if let Some(tg) = &self.adapters.telegram {
            if tg.enabled && tg.token.as_deref().map_or(true, str::is_empty) {
                return Err(ConfigError::MissingField("adapters.telegram.token".to_string()));
            }
        }

        Ok(())
    }

    /// Telegram token, if the adapter is enabled and configured
    pub fn telegram_token(&self) -> Option<&str> {
        self.adapters.telegram
            .as_ref()
            .filter(|t| t.enabled)
            .and_then(|t| t.token.as_deref())
    }

    pub fn limits(&self) -> DiceLimits {
        DiceLimits {
            max_dice_args: self.dice.max_dice_args,
            max_dice_count: self.dice.max_dice_count,
            max_dice_sides: self.dice.max_dice_sides,
            max_message_length: self.dice.max_message_length,
        }
    }
}
