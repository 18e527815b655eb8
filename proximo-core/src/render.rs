//! List rendering: events in, display records out.
//!
//! Both projections are pure. The student list depends only on the events and
//! the filter, the organizer list only on the events and the identity.

use chrono::NaiveDate;

use crate::escape::escape_text;
use crate::event::Event;
use crate::state::Filter;

/// One event as a student sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: String,
    pub badge: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub timing: String,
    pub organization: String,
    /// External link action, present only when the event has a link.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Edit(String),
    Delete(String),
}

/// One of the organizer's own events, with its actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub actions: [CardAction; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentListView {
    pub cards: Vec<EventCard>,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerListView {
    pub cards: Vec<OrganizerCard>,
}

impl StudentListView {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn count_label(&self) -> String {
        self.count().to_string()
    }

    /// Whether the empty-state placeholder shows.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl OrganizerListView {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn count_label(&self) -> String {
        self.count().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Human-readable date, e.g. "Thu Mar 20 2025". Empty when there is no date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%a %b %d %Y").to_string())
        .unwrap_or_default()
}

pub fn event_card(event: &Event) -> EventCard {
    EventCard {
        id: event.id.clone(),
        badge: event.event_type.to_string(),
        title: escape_text(&event.title),
        description: escape_text(&event.description),
        location: escape_text(&event.location),
        date: format_date(event.date),
        timing: escape_text(&event.timing),
        organization: escape_text(&event.organization),
        link: event
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(escape_text),
    }
}

pub fn render_student_list(events: &[Event], filter: Filter) -> StudentListView {
    let cards = events
        .iter()
        .filter(|e| filter.matches(e))
        .map(event_card)
        .collect();

    StudentListView { cards, filter }
}

pub fn render_organizer_list(events: &[Event], identity: &str) -> OrganizerListView {
    let cards = events
        .iter()
        .filter(|e| e.is_owned_by(identity))
        .map(|e| OrganizerCard {
            id: e.id.clone(),
            title: escape_text(&e.title),
            description: escape_text(&e.description),
            actions: [CardAction::Edit(e.id.clone()), CardAction::Delete(e.id.clone())],
        })
        .collect();

    OrganizerListView { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EVENT_TYPES, EventType};

    fn event(id: &str, event_type: EventType, owner: &str) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            event_type,
            location: "Hall".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 6),
            timing: "10:00 - 12:00".into(),
            organization: "Club".into(),
            description: "About".into(),
            link: None,
            owner_identity: owner.into(),
        }
    }

    fn mixed_events() -> Vec<Event> {
        vec![
            event("1", EventType::Hackathon, "demo@x.com"),
            event("2", EventType::Workshop, "other@x.com"),
            event("3", EventType::Seminar, "demo@x.com"),
            event("4", EventType::Hackathon, "third@x.com"),
            event("5", EventType::Webinar, "other@x.com"),
        ]
    }

    #[test]
    fn test_filter_selects_exact_type() {
        let events = vec![
            event("1", EventType::Hackathon, "a@x.com"),
            event("2", EventType::Workshop, "a@x.com"),
        ];

        let view = render_student_list(&events, Filter::Only(EventType::Hackathon));
        assert_eq!(view.count(), 1);
        assert_eq!(view.count_label(), "1");
        assert_eq!(view.cards[0].id, "1");
        assert!(!view.is_empty());
    }

    #[test]
    fn test_filter_holds_for_every_type() {
        let events = mixed_events();

        for t in EVENT_TYPES {
            let view = render_student_list(&events, Filter::Only(t));
            assert!(view.cards.iter().all(|c| c.badge == t.to_string()));
            let expected = events.iter().filter(|e| e.event_type == t).count();
            assert_eq!(view.count(), expected);
        }
    }

    #[test]
    fn test_all_keeps_every_event() {
        let events = mixed_events();
        let view = render_student_list(&events, Filter::All);
        assert_eq!(view.count(), events.len());
    }

    #[test]
    fn test_empty_flag() {
        let events = mixed_events();
        let view = render_student_list(&events[..2], Filter::Only(EventType::Webinar));
        assert!(view.is_empty());
        assert_eq!(view.count_label(), "0");
    }

    #[test]
    fn test_card_fields() {
        let mut e = event("9", EventType::Seminar, "a@x.com");
        e.title = "Rust\u{1b}[2J Talk".into();
        e.link = Some("https://example.com/rsvp".into());

        let card = event_card(&e);
        assert_eq!(card.title, "Rust[2J Talk");
        assert_eq!(card.date, "Thu Mar 06 2025");
        assert_eq!(card.badge, "Seminar");
        assert_eq!(card.link.as_deref(), Some("https://example.com/rsvp"));

        e.date = None;
        e.link = Some("  ".into());
        let card = event_card(&e);
        assert_eq!(card.date, "");
        assert_eq!(card.link, None);
    }

    #[test]
    fn test_organizer_sees_only_own_events() {
        let events = mixed_events();
        let view = render_organizer_list(&events, "demo@x.com");

        assert_eq!(view.count(), 2);
        let ids: Vec<_> = view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(
            view.cards[0].actions,
            [CardAction::Edit("1".into()), CardAction::Delete("1".into())]
        );

        // Same input, same output.
        assert_eq!(view, render_organizer_list(&events, "demo@x.com"));
    }

    #[test]
    fn test_organizer_list_ignores_filter_types() {
        let events = vec![
            event("1", EventType::Webinar, "demo@x.com"),
            event("2", EventType::Workshop, "demo@x.com"),
        ];
        assert_eq!(render_organizer_list(&events, "demo@x.com").count(), 2);
        assert!(render_organizer_list(&events, "nobody@x.com").is_empty());
    }
}
