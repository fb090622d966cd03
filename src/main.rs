use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Update;

use vipgate::cli::{render_status, Cli, Commands};
use vipgate::core::{init_logger, log_configuration, Config};
use vipgate::storage::JsonStore;
use vipgate::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (configuration, logging, missing token).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics inside the dispatcher instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables from .env if present
    let _ = dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_file)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot(config).await,
        Some(Commands::Status { json }) => run_status(&config, json).await,
    }
}

/// Print the store report without contacting Telegram
async fn run_status(config: &Config, json: bool) -> Result<()> {
    let store = JsonStore::new(&config.data_file);
    let data = store.load().await?;
    println!("{}", render_status(&data, json)?);
    Ok(())
}

/// Start long polling. Updates are handled one at a time, in arrival order.
async fn run_bot(config: Config) -> Result<()> {
    log::info!("Starting bot...");
    log_configuration(&config);

    let bot = create_bot(&config).inspect_err(|e| log::error!("Cannot start bot: {}", e))?;

    let me = bot.get_me().await?;
    let bot_username = me.username.clone();
    log::info!("Bot connected as: @{}", bot_username.as_deref().unwrap_or("unknown"));

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let store = Arc::new(JsonStore::new(&config.data_file));
    // Create the store file up front so a bad path fails at startup
    store.load().await?;

    let deps = HandlerDeps::new(Arc::new(config), store, bot_username);

    log::info!("Bot started...");
    Dispatcher::builder(bot, schema(deps))
        // A single distribution key serializes every update
        .distribution_function(|_| Some(()))
        .default_handler(|upd: Arc<Update>| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(teloxide::error_handlers::LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped");
    Ok(())
}
