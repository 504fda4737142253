// ABOUTME: Transient status notifications shown in the footer line
// Notifications expire on their own; errors linger longer than successes

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Info => "•",
            NotificationKind::Warning => "!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    created_at: Instant,
    ttl: Duration,
}

impl Notification {
    fn new(text: impl Into<String>, kind: NotificationKind, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Success, Duration::from_secs(4))
    }

    // Errors stay up longer so they are not missed mid-interaction.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Error, Duration::from_secs(7))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Info, Duration::from_secs(4))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Warning, Duration::from_secs(6))
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}
