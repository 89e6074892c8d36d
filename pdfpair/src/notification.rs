//! Transient status banner.
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one outright and restarts the countdown; nothing is queued.

use std::time::{Duration, Instant};

/// Whether a notification reports a success or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action completed.
    Success,
    /// The action was refused or failed.
    Error,
}

impl NotificationKind {
    /// Glyph rendered in front of the message so the two kinds are never
    /// confused.
    pub fn prefix(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓ ",
            NotificationKind::Error => "⚠ ",
        }
    }
}

/// A message waiting to expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Success or error.
    pub kind: NotificationKind,
    /// Instant after which the banner hides itself.
    pub expires_at: Instant,
}

impl Notification {
    /// Message with its kind prefix, ready for rendering.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.message)
    }
}

/// Banner state: hidden, or showing exactly one notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Banner {
    /// Nothing on screen.
    #[default]
    Hidden,
    /// One notification on screen until its deadline.
    Showing(Notification),
}

impl Banner {
    /// Show `message`, replacing whatever is visible and restarting the
    /// countdown from `now`.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
        timeout: Duration,
    ) -> &Notification {
        *self = Banner::Showing(Notification {
            message: message.into(),
            kind,
            expires_at: now + timeout,
        });

        match self {
            Banner::Showing(notification) => notification,
            Banner::Hidden => unreachable!("banner was just set to Showing"),
        }
    }

    /// Hide immediately. Returns true if something was visible.
    pub fn hide(&mut self) -> bool {
        !matches!(std::mem::take(self), Banner::Hidden)
    }

    /// Hide the notification if its deadline has passed at `now`.
    ///
    /// Returns true when this call hid it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self {
            Banner::Showing(notification) if now >= notification.expires_at => self.hide(),
            _ => false,
        }
    }

    /// Visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        match self {
            Banner::Showing(notification) => Some(notification),
            Banner::Hidden => None,
        }
    }

    /// Time left before the visible notification hides itself.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current()
            .map(|notification| notification.expires_at.saturating_duration_since(now))
    }
}
