//! Form models: the event create/edit form and the sign-in/sign-up form.

use chrono::NaiveDate;

use crate::error::{ProximoError, ProximoResult};
use crate::event::{Event, EventDraft, EventType};
use crate::session::Role;

/// The organizer's event form. Text fields hold raw input; nothing is
/// trimmed until [`EventForm::to_draft`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub title: String,
    pub event_type: EventType,
    pub location: String,
    /// `YYYY-MM-DD` or empty.
    pub date: String,
    pub timing: String,
    pub organization: String,
    pub link: String,
    pub description: String,
}

impl EventForm {
    /// Blank form, with the organization pre-filled from the session.
    pub fn empty(organization: Option<&str>) -> Self {
        EventForm {
            organization: organization.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    pub fn from_event(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            event_type: event.event_type,
            location: event.location.clone(),
            date: event
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            timing: event.timing.clone(),
            organization: event.organization.clone(),
            link: event.link.clone().unwrap_or_default(),
            description: event.description.clone(),
        }
    }

    pub fn to_draft(&self, owner_identity: &str) -> ProximoResult<EventDraft> {
        let date = parse_form_date(&self.date)?;

        Ok(EventDraft {
            title: self.title.clone(),
            event_type: self.event_type,
            location: self.location.clone(),
            date,
            timing: self.timing.clone(),
            organization: self.organization.clone(),
            description: self.description.clone(),
            link: Some(self.link.clone()),
            owner_identity: owner_identity.to_string(),
        }
        .trimmed())
    }
}

/// Parse the form's date field. Empty means no date.
pub fn parse_form_date(input: &str) -> ProximoResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            ProximoError::Validation(format!("Invalid date '{input}'. Expected YYYY-MM-DD"))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Mode and role toggles of the auth page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub role: Role,
}

impl Default for AuthForm {
    fn default() -> Self {
        AuthForm {
            mode: AuthMode::SignIn,
            role: Role::Student,
        }
    }
}

impl AuthForm {
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn header(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn subheader(&self) -> String {
        let action = match self.mode {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        };
        format!("{} as {}", action, self.role.label())
    }

    /// Name, age, gender and college.
    pub fn shows_student_fields(&self) -> bool {
        self.mode == AuthMode::SignUp && self.role == Role::Student
    }

    /// Organization.
    pub fn shows_organizer_fields(&self) -> bool {
        self.mode == AuthMode::SignUp && self.role == Role::Organizer
    }

    pub fn phone_required(&self) -> bool {
        self.mode == AuthMode::SignUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: "e1".into(),
            title: "Hack Night".into(),
            event_type: EventType::Hackathon,
            location: "Lab".into(),
            date: NaiveDate::from_ymd_opt(2025, 11, 2),
            timing: "18:00-23:00".into(),
            organization: "Dev Club".into(),
            description: "Ship it".into(),
            link: Some("https://dev.club".into()),
            owner_identity: "dev@club.org".into(),
        }
    }

    #[test]
    fn test_empty_form_defaults() {
        let form = EventForm::empty(Some("Dev Club"));
        assert_eq!(form.event_type, EventType::Hackathon);
        assert_eq!(form.organization, "Dev Club");
        assert!(form.title.is_empty());
        assert_eq!(EventForm::empty(None).organization, "");
    }

    #[test]
    fn test_prefill_round_trips_to_same_draft() {
        let event = sample_event();
        let form = EventForm::from_event(&event);
        assert_eq!(form.date, "2025-11-02");
        assert_eq!(form.link, "https://dev.club");

        let draft = form.to_draft("dev@club.org").unwrap();
        assert_eq!(draft, event.to_draft());
    }

    #[test]
    fn test_to_draft_trims_and_validates_date() {
        let mut form = EventForm::empty(None);
        form.title = "  Talk  ".into();
        form.date = " ".into();
        form.link = " ".into();

        let draft = form.to_draft("me@x.com").unwrap();
        assert_eq!(draft.title, "Talk");
        assert_eq!(draft.date, None);
        assert_eq!(draft.link, None);

        form.date = "March 3".into();
        assert!(matches!(
            form.to_draft("me@x.com"),
            Err(ProximoError::Validation(_))
        ));
    }

    #[test]
    fn test_auth_form_labels() {
        let mut form = AuthForm::default();
        assert_eq!(form.header(), "Welcome Back");
        assert_eq!(form.subheader(), "Sign In as Student");
        assert!(!form.shows_student_fields());
        assert!(!form.phone_required());

        form.set_mode(AuthMode::SignUp);
        assert_eq!(form.header(), "Create Account");
        assert!(form.shows_student_fields());
        assert!(!form.shows_organizer_fields());
        assert!(form.phone_required());

        form.set_role(Role::Organizer);
        assert_eq!(form.subheader(), "Sign Up as Organizer");
        assert!(form.shows_organizer_fields());
        assert!(!form.shows_student_fields());
    }
}
