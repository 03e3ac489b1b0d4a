// src/services/notify.rs

//! Notification dispatch.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::EmailConfig;

/// Environment variable holding the Mailgun API key.
const API_KEY_ENV: &str = "MAILGUN_API_KEY";

/// Abstraction for delivering the one-time notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message. An `Err` means the message may not have arrived;
    /// the caller decides whether that is retried.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}

/// Notifier backed by the Mailgun messages API.
///
/// The API key is read from the environment at send time, so a missing key
/// surfaces as a failed dispatch rather than a startup error.
pub struct MailgunNotifier {
    client: reqwest::Client,
    api_base: String,
    domain: String,
    sender: String,
}

impl MailgunNotifier {
    /// Create a notifier from the email configuration.
    pub fn new(config: &EmailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            domain: config.domain.clone(),
            sender: config.sender.clone(),
        }
    }
}

#[async_trait]
impl Notifier for MailgunNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::notify(format!("{API_KEY_ENV} not set in environment")))?;

        let url = format!("{}/v3/{}/messages", self.api_base, self.domain);
        let form = [
            ("from", self.sender.as_str()),
            ("to", recipient),
            ("subject", subject),
            ("text", body),
        ];

        log::info!("Sending notification to {}", recipient);
        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::notify(format!(
                "Mail API returned HTTP {status}: {message}"
            )));
        }

        log::info!("Notification sent successfully");
        Ok(())
    }
}
