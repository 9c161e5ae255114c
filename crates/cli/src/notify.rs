//! Transient status banners.
//!
//! Each notification is emitted to the operator as soon as it is
//! raised and kept on an internal stack until it expires. Entries are
//! independent and unordered: several may be active at once and each
//! removes itself after the fixed delay.

use std::time::{Duration, Instant};

use colored::Colorize;

/// How long a notification stays active before it self-removes.
pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Notification severity, mirroring the dashboard's banner styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A transient status banner.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
}

impl Notification {
    fn new(message: String, severity: Severity) -> Self {
        Self {
            message,
            severity,
            created_at: Instant::now(),
        }
    }

    /// Whether this notification has outlived [`DISMISS_AFTER`].
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= DISMISS_AFTER
    }

    fn banner(&self) -> String {
        let label = self.severity.label();
        let tag = match self.severity {
            Severity::Info => label.blue(),
            Severity::Success => label.green(),
            Severity::Warning => label.yellow(),
            Severity::Danger => label.red(),
        };
        format!("[{tag}] {}", self.message)
    }
}

/// Collects and emits notifications. Fire-and-forget: raising a
/// notification has no return value and no failure mode.
#[derive(Debug, Default)]
pub struct Notifier {
    stack: Vec<Notification>,
}

impl Notifier {
    /// Raise a notification: print its banner and keep it on the stack
    /// until it expires.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let notification = Notification::new(message.into(), severity);
        println!("{}", notification.banner());
        self.stack.push(notification);
    }

    /// Drop every notification that expired as of `now`.
    pub fn sweep(&mut self, now: Instant) {
        self.stack.retain(|n| !n.is_expired(now));
    }

    /// Currently active notifications, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_stacks_independently() {
        let mut notifier = Notifier::default();
        notifier.notify("first", Severity::Info);
        notifier.notify("second", Severity::Danger);

        let active = notifier.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "first");
        assert_eq!(active[1].severity, Severity::Danger);
    }

    #[test]
    fn test_sweep_keeps_fresh_notifications() {
        let mut notifier = Notifier::default();
        notifier.notify("fresh", Severity::Success);
        notifier.sweep(Instant::now());
        assert_eq!(notifier.active().len(), 1);
    }

    #[test]
    fn test_sweep_drops_expired_notifications() {
        let mut notifier = Notifier::default();
        notifier.notify("stale", Severity::Warning);
        notifier.sweep(Instant::now() + DISMISS_AFTER);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_expiry_is_per_notification() {
        let mut notifier = Notifier::default();
        notifier.notify("one", Severity::Info);
        notifier.notify("two", Severity::Info);

        // Both were raised within the same instant window, so both
        // expire together at the cutoff.
        assert_eq!(notifier.active().len(), 2);
        notifier.sweep(Instant::now() + DISMISS_AFTER + Duration::from_millis(1));
        assert!(notifier.active().is_empty());
    }
}
