//! Notification surface contract: transient messages and modal dialogs.

/// Message sink consumed by the controller.
pub trait NotificationSurface {
    /// Show a short-lived message (a toast): the end-of-round announcement.
    fn show_transient(&mut self, message: &str);

    /// Show a modal dialog: the about box.
    fn show_modal(&mut self, title: &str, message: &str);
}

/// Notifier that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl NotificationSurface for NullNotifier {
    fn show_transient(&mut self, _message: &str) {}
    fn show_modal(&mut self, _title: &str, _message: &str) {}
}

/// Notifier that keeps every message for later assertion.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    /// Transient messages, oldest first.
    pub transients: Vec<String>,

    /// Modal dialogs as (title, message) pairs, oldest first.
    pub modals: Vec<(String, String)>,
}

impl RecordingNotifier {
    /// Create an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent transient message, if any.
    #[must_use]
    pub fn last_transient(&self) -> Option<&str> {
        self.transients.last().map(String::as_str)
    }
}

impl NotificationSurface for RecordingNotifier {
    fn show_transient(&mut self, message: &str) {
        self.transients.push(message.to_string());
    }

    fn show_modal(&mut self, title: &str, message: &str) {
        self.modals.push((title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_captures_messages() {
        let mut notifier = RecordingNotifier::new();

        notifier.show_transient("Game over! The winner is Nobody");
        notifier.show_modal("Tap Duel", "Two players, one countdown.");

        assert_eq!(notifier.last_transient(), Some("Game over! The winner is Nobody"));
        assert_eq!(notifier.modals.len(), 1);
        assert_eq!(notifier.modals[0].0, "Tap Duel");
    }

    #[test]
    fn test_empty_notifier_has_no_last_transient() {
        let notifier = RecordingNotifier::new();
        assert_eq!(notifier.last_transient(), None);
    }
}
