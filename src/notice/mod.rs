//! Transient feedback notices.
//!
//! A notice carries its own expiry instant. Callers re-read
//! [`NoticeBoard::deadline`] after every change, so a timer is always armed
//! for the notice currently shown.

use std::fmt;
use std::time::{Duration, Instant};

/// Whether the last submission went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A message shown to the user for a bounded time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
    fallback_link: Option<String>,
    expires_at: Instant,
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Alternate contact link offered alongside failure notices.
    pub fn fallback_link(&self) -> Option<&str> {
        self.fallback_link.as_deref()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback_link {
            Some(link) => write!(f, "{} {}", self.message, link),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Holder for at most one live notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    /// Create a board whose notices live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl,
        }
    }

    /// Replace whatever is shown with a new notice.
    pub fn show(
        &mut self,
        kind: NoticeKind,
        message: impl Into<String>,
        fallback_link: Option<String>,
        now: Instant,
    ) {
        self.current = Some(Notice {
            kind,
            message: message.into(),
            fallback_link,
            expires_at: now + self.ttl,
        });
    }

    /// Remove the current notice immediately.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The current notice, unless its window has passed.
    pub fn active(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Drop the current notice if it has expired. Returns true if one was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notice) if notice.is_expired(now) => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// When the current notice will expire, if one is shown.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }
}
