// src/services/monitor.rs

//! Notify-once monitoring coordinator.
//!
//! One invocation is one strictly sequential unit of work: load state, at
//! most one fetch, one extraction pass, one match check, at most one
//! dispatch, at most one save. The persisted flag only advances from pending
//! to done, so a run killed before its save is equivalent to a run that
//! never happened.

use std::sync::Arc;

use crate::error::Result;
use crate::extract;
use crate::models::Config;
use crate::services::fetch::Fetcher;
use crate::services::notify::Notifier;
use crate::storage::StateFile;

/// Notification body; placeholders are filled in before dispatch.
const BODY_TEMPLATE: &str = "\
{keyword} {year} proceedings are now available!

Conference keyword: {keyword}
Year: {year}

Proceedings URL: {url}

Detected entry:
{entry}

---
This is an automated notification from procwatch.
";

/// Typed result of one monitoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The notification fired in an earlier run; nothing was done
    AlreadyNotified,
    /// The page could not be retrieved; retry on the next scheduled run
    FetchFailed,
    /// The page yielded no recognizable entries
    NoEntries,
    /// Entries were found but none carried both target tokens yet
    NoMatch,
    /// Match found and the notification was delivered
    Notified,
    /// Match found but delivery failed; the dispatch is not retried
    NotifiedSendFailed,
    /// An unclassified failure; state was left untouched
    Failed,
}

impl RunOutcome {
    /// Process exit code for this outcome. Expected polling results exit
    /// zero; anything an operator should look at exits non-zero.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::AlreadyNotified | Self::NoEntries | Self::NoMatch | Self::Notified => 0,
            Self::FetchFailed | Self::NotifiedSendFailed | Self::Failed => 1,
        }
    }
}

/// Coordinates one monitoring run end to end.
pub struct Monitor {
    config: Arc<Config>,
    fetcher: Box<dyn Fetcher>,
    notifier: Box<dyn Notifier>,
    store: StateFile,
}

impl Monitor {
    /// Create a monitor wired to the given collaborators.
    pub fn new(
        config: Arc<Config>,
        fetcher: Box<dyn Fetcher>,
        notifier: Box<dyn Notifier>,
        store: StateFile,
    ) -> Self {
        Self {
            config,
            fetcher,
            notifier,
            store,
        }
    }

    /// Run the monitor once.
    ///
    /// Every anticipated condition maps to a typed outcome. Anything else is
    /// caught here with state untouched, so the next scheduled run re-checks
    /// from scratch rather than losing a true positive.
    pub async fn run(&self) -> RunOutcome {
        match self.run_inner().await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Unexpected error during run: {}", e);
                RunOutcome::Failed
            }
        }
    }

    async fn run_inner(&self) -> Result<RunOutcome> {
        let mut state = self.store.load().await;
        if state.notified {
            log::info!("Already notified. Nothing to do.");
            return Ok(RunOutcome::AlreadyNotified);
        }

        let monitor = &self.config.monitor;
        let Some(page) = self.fetcher.fetch(&monitor.target_url).await else {
            log::error!("Failed to fetch page");
            return Ok(RunOutcome::FetchFailed);
        };

        let entries = extract::extract_entries(&page);
        if entries.is_empty() {
            log::warn!("No proceeding entries found");
            return Ok(RunOutcome::NoEntries);
        }
        log::info!("Found {} proceeding entries", entries.len());

        let Some(hit) =
            extract::find_match(&entries, &monitor.target_year, &monitor.target_keyword)
        else {
            log::info!(
                "{} {} proceedings not yet published",
                monitor.target_keyword,
                monitor.target_year
            );
            return Ok(RunOutcome::NoMatch);
        };
        log::info!("Found matching entry: {}", hit.preview());

        let email = &self.config.email;
        let body = self.render_body(&hit.text);
        let sent = self
            .notifier
            .send(&email.recipient, &email.subject, &body)
            .await;

        // The flag advances on both branches: an unreachable notifier must
        // not turn every later scheduled run into another dispatch attempt.
        state.mark_notified();
        self.store.save(&state).await?;

        match sent {
            Ok(()) => {
                log::info!("Notification sent and state updated");
                Ok(RunOutcome::Notified)
            }
            Err(e) => {
                log::error!("Notification dispatch failed: {}", e);
                Ok(RunOutcome::NotifiedSendFailed)
            }
        }
    }

    fn render_body(&self, entry_text: &str) -> String {
        let monitor = &self.config.monitor;
        BODY_TEMPLATE
            .replace("{keyword}", &monitor.target_keyword)
            .replace("{year}", &monitor.target_year)
            .replace("{url}", &monitor.target_url)
            .replace("{entry}", entry_text)
    }
}
