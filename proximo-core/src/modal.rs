//! The single reusable dialog.
//!
//! Opening a modal replaces whatever was showing; nothing is queued. A modal
//! either offers only dismiss, or confirm and dismiss when it carries a
//! [`ModalAction`].

use crate::error::ProximoError;

const DEFAULT_CONFIRM_LABEL: &str = "Confirm";

/// Work to run when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    DeleteEvent(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSpec {
    pub title: String,
    pub body: String,
    pub confirm_action: Option<ModalAction>,
    pub confirm_label: String,
}

impl ModalSpec {
    /// An informational modal with only a dismiss button.
    pub fn notice(title: impl Into<String>, body: impl Into<String>) -> Self {
        ModalSpec {
            title: title.into(),
            body: body.into(),
            confirm_action: None,
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
        }
    }

    pub fn error(err: &ProximoError) -> Self {
        Self::notice("Error", err.to_string())
    }

    pub fn confirmation(
        title: impl Into<String>,
        body: impl Into<String>,
        action: ModalAction,
    ) -> Self {
        ModalSpec {
            confirm_action: Some(action),
            ..Self::notice(title, body)
        }
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn is_confirmable(&self) -> bool {
        self.confirm_action.is_some()
    }
}

#[derive(Debug, Default)]
pub struct ModalController {
    active: Option<ModalSpec>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, spec: ModalSpec) {
        if let Some(prev) = &self.active {
            tracing::debug!(replaced = %prev.title, "modal replaced");
        }
        self.active = Some(spec);
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<&ModalSpec> {
        self.active.as_ref()
    }

    /// Close the modal and hand back its action for the caller to run.
    pub fn confirm(&mut self) -> Option<ModalAction> {
        self.active.take().and_then(|spec| spec.confirm_action)
    }

    /// Close without running anything.
    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_offers_only_dismiss() {
        let mut modal = ModalController::new();
        modal.open(ModalSpec::notice("Success", "Event posted!"));

        let current = modal.current().unwrap();
        assert!(!current.is_confirmable());
        assert_eq!(current.confirm_label, "Confirm");

        assert_eq!(modal.confirm(), None);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_confirm_returns_action_and_closes() {
        let mut modal = ModalController::new();
        modal.open(
            ModalSpec::confirmation(
                "Confirm Delete",
                "This cannot be undone!",
                ModalAction::DeleteEvent("42".into()),
            )
            .with_confirm_label("Delete"),
        );

        assert_eq!(modal.current().unwrap().confirm_label, "Delete");
        assert_eq!(modal.confirm(), Some(ModalAction::DeleteEvent("42".into())));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_dismiss_drops_action() {
        let mut modal = ModalController::new();
        modal.open(ModalSpec::confirmation(
            "Confirm Delete",
            "",
            ModalAction::DeleteEvent("1".into()),
        ));
        modal.dismiss();

        assert!(!modal.is_open());
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_open_replaces_without_queueing() {
        let mut modal = ModalController::new();
        modal.open(ModalSpec::confirmation(
            "Confirm Delete",
            "",
            ModalAction::DeleteEvent("1".into()),
        ));
        modal.open(ModalSpec::error(&ProximoError::Auth("Invalid email or password".into())));

        let current = modal.current().unwrap();
        assert_eq!(current.title, "Error");
        assert_eq!(current.body, "Invalid email or password");

        modal.dismiss();
        assert!(!modal.is_open());
    }
}
