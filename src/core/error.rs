use thiserror::Error;

/// Centralized error type for the bot
///
/// Handler, storage and startup failures are converted to this enum so they
/// can be logged and matched in one place.
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors (store file, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store document could not be encoded or decoded
    #[error("Store format error: {0}")]
    StoreFormat(#[from] serde_json::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A recipient id that is not a valid Telegram chat id
    #[error("Invalid chat id: {0:?}")]
    InvalidChatId(String),

    /// Anyhow errors (for general error handling)
    #[error("Application error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chat_id_display_quotes_value() {
        let err = AppError::InvalidChatId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid chat id: \"abc\"");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> AppResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(AppError::Io(_))));
    }
}
