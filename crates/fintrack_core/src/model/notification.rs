//! Notification domain model.
//!
//! # Responsibility
//! - Define the transient toast record rendered by the dashboard shell.
//! - Keep identity opaque so UI code never derives meaning from it.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused within a queue.
//! - `duration_ms` is always positive.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Auto-dismiss delay applied when the producer does not pick one.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Opaque identifier for one live notification.
///
/// Generated from a per-queue monotonic counter, so two records created in
/// the same tick still receive distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_sequence(value: u64) -> Self {
        Self(value)
    }

    /// Raw sequence value, mainly for FFI transport.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ntf-{}", self.0)
    }
}

/// Visual intent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parses the wire label used by UI callers.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// One live notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    /// Short headline, always present.
    pub title: String,
    /// Optional body text under the headline.
    pub message: Option<String>,
    /// Delay between creation and automatic removal.
    pub duration_ms: u64,
    /// Clock reading at creation, in the queue clock's milliseconds.
    pub created_at_ms: u64,
}

impl Notification {
    /// Absolute clock reading at which this record expires.
    pub fn expires_at_ms(&self) -> u64 {
        self.created_at_ms.saturating_add(self.duration_ms)
    }
}
