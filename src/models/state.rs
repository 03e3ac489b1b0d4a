//! Persisted notify-once state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable record of whether the one-time notification has fired.
///
/// Serialized as a small JSON object. `notified` is the only field the
/// monitor acts on and it only ever moves from `false` to `true`; fields
/// written by other tools are carried through a load/save cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Whether the notification has been dispatched
    #[serde(default)]
    pub notified: bool,

    /// When the flag was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<DateTime<Utc>>,

    /// Unrecognized fields, preserved across load/save
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NotificationState {
    /// Mark the notification as dispatched, stamping the current time.
    pub fn mark_notified(&mut self) {
        self.notified = true;
        self.notified_at = Some(Utc::now());
    }
}
