// src/services/fetch.rs

//! Page retrieval.
//!
//! The coordinator only needs "the rendered content of the page, or
//! nothing": every transport failure is logged and collapsed into `None`,
//! which the caller treats as a retry-next-run outcome.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::models::HttpConfig;

/// Abstraction over page retrieval.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the rendered content of `url`, or `None` on any failure.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Plain HTTP fetcher presenting a realistic browser profile.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured User-Agent and timeout.
    pub fn new(config: &HttpConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        log::info!("Fetching page: {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Error fetching page: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::error!("Fetch returned HTTP {}", status);
            return None;
        }

        match response.text().await {
            Ok(text) => {
                log::info!("Successfully fetched page (status: {})", status);
                Some(text)
            }
            Err(e) => {
                log::error!("Error reading page body: {}", e);
                None
            }
        }
    }
}

/// Fetcher that routes through a Browserless instance, so content populated
/// by client-side rendering is present in the returned markup.
pub struct RenderedFetcher {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl RenderedFetcher {
    /// Create a fetcher against the given Browserless base URL.
    pub fn new(config: &HttpConfig, endpoint: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: config.render_token.clone(),
        }
    }
}

#[async_trait]
impl Fetcher for RenderedFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let mut endpoint = format!("{}/content", self.endpoint);
        if let Some(token) = &self.token {
            endpoint.push_str(&format!("?token={token}"));
        }

        log::info!("Fetching rendered page: {}", url);
        let body = serde_json::json!({ "url": url });
        let response = match self.client.post(&endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Error reaching render endpoint: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::error!("Render endpoint returned HTTP {}: {}", status, message);
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Error reading rendered body: {}", e);
                None
            }
        }
    }
}
