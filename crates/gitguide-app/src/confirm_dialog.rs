//! Confirmation dialog state

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels with the message each one sends
    pub options: Vec<(String, Message)>,
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Dialog shown before wiping the progress checklist
    pub fn reset_progress() -> Self {
        Self::new(
            "Reset Progress",
            "Are you sure you want to reset your progress?",
            vec![
                ("Yes", Message::ConfirmResetProgress),
                ("No", Message::CancelResetProgress),
            ],
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_progress_dialog() {
        let dialog = ConfirmDialogState::reset_progress();
        assert_eq!(dialog.message, "Are you sure you want to reset your progress?");
        assert_eq!(dialog.options.len(), 2);
        assert!(matches!(
            dialog.selected_message(),
            Some(Message::ConfirmResetProgress)
        ));
    }

    #[test]
    fn test_selection_wraps_between_buttons() {
        let mut dialog = ConfirmDialogState::reset_progress();
        dialog.select_next();
        assert!(matches!(
            dialog.selected_message(),
            Some(Message::CancelResetProgress)
        ));
        dialog.select_next();
        assert_eq!(dialog.selected, 0);
        dialog.select_previous();
        assert_eq!(dialog.selected, 1);
    }
}
