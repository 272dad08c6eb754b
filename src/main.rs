use clap::{Parser, Subcommand};

use diceroll_bot::application::dice::RollComposer;
use diceroll_bot::application::errors::BotError;
use diceroll_bot::application::messaging::MessageDispatcher;
use diceroll_bot::application::services::CommandService;
use diceroll_bot::infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use diceroll_bot::infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "diceroll-bot")]
#[command(about = "A chat bot that rolls dice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Version => {
            println!("diceroll-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Result<Config, BotError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
            .with_env()
    } else {
        Config::load_env()
    };

    if let Some(token) = token_override {
        let tg = config.adapters.telegram.get_or_insert_with(Default::default);
        tg.token = Some(token);
        tg.enabled = true;
    }

    config.validate()?;
    Ok(config)
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path, token_override)?;
    let limits = config.limits();

    tracing::info!("Starting {}", config.bot.name);
    tracing::info!(
        "Limits: {} dice arguments, {} dice, {} sides, {} characters",
        limits.max_dice_args, limits.max_dice_count, limits.max_dice_sides, limits.max_message_length
    );

    let mut commands = CommandService::new(&config.bot.prefix);
    commands.register_defaults(RollComposer::new(limits));
    let dispatcher = MessageDispatcher::new(commands);
    let registered = dispatcher.commands();
    for cmd in registered.commands() {
        tracing::debug!("Registered {}", cmd.summary(registered.prefix()));
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    if let Some(token) = config.telegram_token() {
        rt.block_on(async {
            let mut bot = TelegramAdapter::new(token);
            bot.run(&dispatcher).await
        })
    } else {
        if !config.adapters.console.as_ref().is_some_and(|c| c.enabled) {
            return Err(BotError::Internal(
                "No adapter enabled: set adapters.telegram.token or enable adapters.console".to_string(),
            ));
        }

        // Run console bot (dev mode)
        rt.block_on(async {
            let bot = ConsoleAdapter::new(&config.bot.name);
            bot.run(&dispatcher).await
        })
    }
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
