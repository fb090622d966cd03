//! Runtime configuration
//!
//! Every setting is read once at startup from the environment (after `.env` is
//! loaded) into an immutable [`Config`] that is passed to the handlers.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::core::error::{AppError, AppResult};

/// Referral link used when BROKER_LINK is not set
pub const DEFAULT_REFERRAL_LINK: &str = "https://u3.shortink.io/smart/kcJjtFEblLUmCL";

/// Promo code used when BONUS_CODE is not set
pub const DEFAULT_PROMO_CODE: &str = "BXH547";

/// Store file used when DATA_FILE is not set
pub const DEFAULT_DATA_FILE: &str = "bot_data.json";

/// Log file used when LOG_FILE_PATH is not set
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// HTTP client timeout used when REQUEST_TIMEOUT_SECS is not set.
/// Must stay above the long polling timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variables checked for the bot token, in order
const TOKEN_VARS: [&str; 3] = ["TELEGRAM_TOKEN", "BOT_TOKEN", "TELOXIDE_TOKEN"];

/// Operator allow-list
///
/// Holds the raw ADMIN_ID value and its comma-separated segments. A caller is
/// an operator when its id equals the raw value or any trimmed segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorIds {
    raw: String,
    ids: Vec<String>,
}

impl OperatorIds {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Self { raw, ids }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        if user_id.is_empty() {
            return false;
        }
        self.raw == user_id || self.ids.iter().any(|id| id == user_id)
    }

    /// Recipient of operator notifications: the first configured id
    pub fn primary(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Immutable bot configuration
#[derive(Debug)]
pub struct Config {
    /// Bot token; only `run` requires it
    pub bot_token: Option<SecretString>,
    pub operators: OperatorIds,
    pub referral_link: String,
    pub promo_code: String,
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    /// Custom Bot API server, if any
    pub bot_api_url: Option<Url>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = TOKEN_VARS.iter().find_map(|key| get(*key)).map(SecretString::from);

        let bot_api_url = match get("BOT_API_URL") {
            Some(raw) => Some(
                Url::parse(&raw).map_err(|e| AppError::Config(format!("Invalid BOT_API_URL {:?}: {}", raw, e)))?,
            ),
            None => None,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| AppError::Config(format!("REQUEST_TIMEOUT_SECS must be a number, got {:?}", raw)))?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            bot_token,
            operators: OperatorIds::parse(&get("ADMIN_ID").unwrap_or_default()),
            referral_link: get("BROKER_LINK").unwrap_or_else(|| DEFAULT_REFERRAL_LINK.to_string()),
            promo_code: get("BONUS_CODE").unwrap_or_else(|| DEFAULT_PROMO_CODE.to_string()),
            data_file: PathBuf::from(get("DATA_FILE").unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())),
            log_file: PathBuf::from(get("LOG_FILE_PATH").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())),
            bot_api_url,
            request_timeout,
        })
    }

    /// Returns the bot token or a configuration error naming the variable
    pub fn require_token(&self) -> AppResult<&SecretString> {
        self.bot_token
            .as_ref()
            .ok_or_else(|| AppError::Config("TELEGRAM_TOKEN not set".to_string()))
    }
}
