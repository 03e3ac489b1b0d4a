//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target page and match tokens
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// HTTP fetch behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Outbound notification settings
    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.monitor.target_url.trim().is_empty() {
            return Err(AppError::validation("monitor.target_url is empty"));
        }
        if self.monitor.target_year.trim().is_empty() {
            return Err(AppError::validation("monitor.target_year is empty"));
        }
        if self.monitor.target_keyword.trim().is_empty() {
            return Err(AppError::validation("monitor.target_keyword is empty"));
        }
        if self.monitor.state_file.trim().is_empty() {
            return Err(AppError::validation("monitor.state_file is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if !self.email.recipient.contains('@') {
            return Err(AppError::validation(
                "email.recipient is not an email address",
            ));
        }
        if self.email.domain.trim().is_empty() {
            return Err(AppError::validation("email.domain is empty"));
        }
        Ok(())
    }
}

/// Target page and match token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// URL of the proceedings listing page to poll
    #[serde(default = "defaults::target_url")]
    pub target_url: String,

    /// Year token that must appear in the matched entry (exact)
    #[serde(default = "defaults::target_year")]
    pub target_year: String,

    /// Keyword token that must appear in the matched entry (case-insensitive)
    #[serde(default = "defaults::target_keyword")]
    pub target_keyword: String,

    /// Path of the JSON file holding the notify-once flag
    #[serde(default = "defaults::state_file")]
    pub state_file: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target_url: defaults::target_url(),
            target_year: defaults::target_year(),
            target_keyword: defaults::target_keyword(),
            state_file: defaults::state_file(),
        }
    }
}

/// HTTP fetch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Base URL of a Browserless instance for rendered fetches.
    /// When unset, pages are fetched with a plain GET.
    #[serde(default)]
    pub render_endpoint: Option<String>,

    /// API token for the Browserless instance
    #[serde(default)]
    pub render_token: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            render_endpoint: None,
            render_token: None,
        }
    }
}

/// Outbound notification settings.
///
/// The Mailgun API key is never stored here; it is read from the
/// `MAILGUN_API_KEY` environment variable at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Mail API base URL
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// Mailgun sending domain
    #[serde(default = "defaults::domain")]
    pub domain: String,

    /// From address
    #[serde(default = "defaults::sender")]
    pub sender: String,

    /// Recipient address
    #[serde(default = "defaults::recipient")]
    pub recipient: String,

    /// Subject line of the notification
    #[serde(default = "defaults::subject")]
    pub subject: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::api_base(),
            domain: defaults::domain(),
            sender: defaults::sender(),
            recipient: defaults::recipient(),
            subject: defaults::subject(),
        }
    }
}

/// Default configuration values.
mod defaults {
    pub fn target_url() -> String {
        "https://ieeexplore.ieee.org/xpl/conhome/1845744/all-proceedings".to_string()
    }

    pub fn target_year() -> String {
        "2025".to_string()
    }

    pub fn target_keyword() -> String {
        "ICONAT".to_string()
    }

    pub fn state_file() -> String {
        "state.json".to_string()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            .to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn api_base() -> String {
        "https://api.mailgun.net".to_string()
    }

    pub fn domain() -> String {
        "mg.example.com".to_string()
    }

    pub fn sender() -> String {
        "procwatch <postmaster@mg.example.com>".to_string()
    }

    pub fn recipient() -> String {
        "babhinay27@gmail.com".to_string()
    }

    pub fn subject() -> String {
        "IEEE ICONAT 2025 Proceedings Are Live".to_string()
    }
}
