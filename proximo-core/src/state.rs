//! The view-state store.
//!
//! One owned value holds everything the front end renders from: the session,
//! the event collection as last fetched, the student filter and the edit
//! cursor. Mutations are plain in-memory updates; callers re-render
//! explicitly afterwards.

use std::fmt;
use std::str::FromStr;

use crate::event::{EVENT_TYPES, Event, EventType};
use crate::session::Session;

/// Student-facing type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(EventType),
}

impl Filter {
    /// Menu order: All first, then every event type.
    pub fn options() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(EVENT_TYPES.iter().copied().map(Filter::Only))
            .collect()
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(t) => event.event_type == *t,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(t) => write!(f, "{t}"),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse::<EventType>().map(Filter::Only)
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    session: Option<Session>,
    events: Vec<Event>,
    filter: Filter,
    edit_cursor: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Swap in a freshly fetched collection. Nothing of the old one survives.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn begin_edit(&mut self, id: &str) {
        self.edit_cursor = Some(id.to_string());
    }

    pub fn end_edit(&mut self) {
        self.edit_cursor = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn edit_cursor(&self) -> Option<&str> {
        self.edit_cursor.as_deref()
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn event(id: &str, event_type: EventType) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            event_type,
            location: String::new(),
            date: None,
            timing: String::new(),
            organization: String::new(),
            description: String::new(),
            link: None,
            owner_identity: "org@x.com".into(),
        }
    }

    #[test]
    fn test_filter_parse_and_display() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "Webinar".parse::<Filter>().unwrap(),
            Filter::Only(EventType::Webinar)
        );
        assert_eq!(Filter::Only(EventType::Seminar).to_string(), "Seminar");
        assert_eq!(Filter::options().len(), 5);
        assert_eq!(Filter::options()[0], Filter::All);
    }

    #[test]
    fn test_replace_events_is_total() {
        let mut state = ViewState::new();
        state.replace_events(vec![event("1", EventType::Hackathon), event("2", EventType::Seminar)]);
        state.replace_events(vec![event("3", EventType::Webinar)]);

        assert_eq!(state.events().len(), 1);
        assert!(state.find_event("1").is_none());
        assert!(state.find_event("3").is_some());
    }

    #[test]
    fn test_fields_are_independent() {
        let mut state = ViewState::new();
        state.set_session(Session {
            role: Role::Organizer,
            display_name: "Org".into(),
            identity: "org@x.com".into(),
            organization: None,
        });
        state.set_filter(Filter::Only(EventType::Workshop));
        state.begin_edit("7");

        state.clear_session();
        assert_eq!(state.filter(), Filter::Only(EventType::Workshop));
        assert_eq!(state.edit_cursor(), Some("7"));

        state.end_edit();
        assert_eq!(state.edit_cursor(), None);
        assert_eq!(state.filter(), Filter::Only(EventType::Workshop));
    }
}
