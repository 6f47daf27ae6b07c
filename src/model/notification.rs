//! Notification model
//!
//! Temporary feedback messages (finished refreshes, rejected moves)

use std::time::{Duration, Instant};

/// How long a notification stays on screen unless overridden
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - operation completed (green)
    Success,
    /// Warning - request rejected, nothing changed (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
    /// Display duration
    pub ttl: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Check if the notification has outlived its ttl
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}
