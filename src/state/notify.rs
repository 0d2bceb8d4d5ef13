// Notification state.
// Transient toasts and modal informational popups, owned by the app and
// rendered by the UI layer.

use std::time::{Duration, Instant};

/// Display time hint for a short transient message.
pub const SHORT_MESSAGE: Duration = Duration::from_secs(2);

/// Display time hint for a longer transient message.
pub const LONG_MESSAGE: Duration = Duration::from_secs(4);

/// A transient, non-blocking notice.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub deadline: Instant,
}

/// A modal informational dialog with a single acknowledgement action.
#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub message: String,
}

/// Notification surface. Fire-and-forget: showing never fails and
/// dismissal triggers no callback.
#[derive(Debug, Default)]
pub struct Notifier {
    toast: Option<Toast>,
    popup: Option<Popup>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a transient notice for roughly `duration_hint`.
    /// A newer message replaces the current one.
    pub fn show_message(&mut self, text: impl Into<String>, duration_hint: Duration) {
        self.toast = Some(Toast {
            text: text.into(),
            deadline: Instant::now() + duration_hint,
        });
    }

    /// Display a modal informational dialog until acknowledged.
    pub fn show_popup(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.popup = Some(Popup {
            title: title.into(),
            message: message.into(),
        });
    }

    /// The toast to render, if its deadline has not passed.
    /// Expired toasts are dropped on read.
    pub fn active_toast(&mut self) -> Option<&Toast> {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.deadline)
        {
            self.toast = None;
        }
        self.toast.as_ref()
    }

    /// The modal to render, if one is open.
    pub fn active_popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn has_popup(&self) -> bool {
        self.popup.is_some()
    }

    /// Acknowledge and close the modal.
    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_hint() {
        let mut notifier = Notifier::new();
        notifier.show_message("saved", Duration::from_secs(60));
        assert!(notifier.active_toast().is_some());

        notifier.show_message("gone", Duration::ZERO);
        assert!(notifier.active_toast().is_none());
    }

    #[test]
    fn test_newer_message_replaces_current() {
        let mut notifier = Notifier::new();
        notifier.show_message("first", SHORT_MESSAGE);
        notifier.show_message("second", SHORT_MESSAGE);
        assert_eq!(notifier.active_toast().unwrap().text, "second");
    }

    #[test]
    fn test_popup_until_dismissed() {
        let mut notifier = Notifier::new();
        assert!(!notifier.has_popup());

        notifier.show_popup("About", "details");
        assert_eq!(notifier.active_popup().unwrap().title, "About");

        notifier.dismiss_popup();
        assert!(!notifier.has_popup());
    }
}
