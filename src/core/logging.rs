//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Configuration summary at startup

use anyhow::Result;
use simplelog::*;
use std::path::Path;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or install the logger
pub fn init_logger(log_file_path: &Path) -> Result<()> {
    let log_file = fs_err::File::create(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at application startup
///
/// The bot token is never printed, only whether it is present.
pub fn log_configuration(config: &crate::core::config::Config) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config.bot_token.is_some() {
        log::info!("✅ Bot token: set");
    } else {
        log::error!("❌ Bot token: not set (TELEGRAM_TOKEN)");
    }

    match config.operators.len() {
        0 => {
            log::warn!("⚠️  ADMIN_ID: not set");
            log::warn!("   /verify is disabled and UID submissions will not be forwarded");
        }
        1 => log::info!("✅ Operator: {}", config.operators.primary().unwrap_or_default()),
        n => log::info!(
            "✅ Operators: {} configured, notifications go to {}",
            n,
            config.operators.primary().unwrap_or_default()
        ),
    }

    log::info!("🔗 Referral link: {}", config.referral_link);
    log::info!("🎁 Promo code: {}", config.promo_code);
    log::info!("💾 Data file: {}", config.data_file.display());
    if let Some(ref url) = config.bot_api_url {
        log::info!("🌐 Bot API URL: {}", url);
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    // Only this test installs the global logger in the unit test binary
    #[test]
    fn test_init_logger_writes_configuration_to_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = crate::core::config::Config::from_lookup(|key| match key {
            "TELEGRAM_TOKEN" => Some("123:secret-token".to_string()),
            "ADMIN_ID" => Some("5120079243".to_string()),
            _ => None,
        })
        .unwrap();

        init_logger(temp_file.path()).unwrap();
        log_configuration(&config);
        log::logger().flush();

        let contents = fs_err::read_to_string(temp_file.path()).unwrap();
        assert!(contents.contains("Configuration"));
        assert!(contents.contains("Operator: 5120079243"));
        assert!(contents.contains("Bot token: set"));
        assert!(!contents.contains("secret-token"));
    }
}
