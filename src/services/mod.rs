//! Service layer for the monitor application.
//!
//! This module contains:
//! - Page retrieval (`Fetcher` implementations)
//! - Notification dispatch (`Notifier` implementations)
//! - The notify-once run coordinator (`Monitor`)

mod fetch;
mod monitor;
mod notify;

pub use fetch::{Fetcher, HttpFetcher, RenderedFetcher};
pub use monitor::{Monitor, RunOutcome};
pub use notify::{MailgunNotifier, Notifier};
