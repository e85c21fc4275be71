//! Notification model
//!
//! Short-lived feedback shown in the timeline title bar (reload results, selection counts).

use std::time::{Duration, Instant};

/// How long a notification stays visible
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Timeline loaded (green)
    Success,
    /// Informational (cyan)
    Info,
    /// Something was skipped or ignored (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }

    /// Label shown before the message
    pub fn label(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "Loaded:",
            NotificationKind::Info => "Info:",
            NotificationKind::Warning => "Warning:",
        }
    }
}
