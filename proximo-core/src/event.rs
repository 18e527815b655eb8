//! Event types shared by the front end and the event service.
//!
//! Field names on the wire follow the event service's JSON: `type` for the
//! event kind and `organizerId` for the owning organizer's identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of event kinds, in menu order.
pub const EVENT_TYPES: [EventType; 4] = [
    EventType::Hackathon,
    EventType::Seminar,
    EventType::Webinar,
    EventType::Workshop,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Hackathon,
    Seminar,
    Webinar,
    Workshop,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Hackathon => "Hackathon",
            EventType::Seminar => "Seminar",
            EventType::Webinar => "Webinar",
            EventType::Workshop => "Workshop",
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        EVENT_TYPES[0]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EVENT_TYPES
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown event type '{}'. Expected one of: {}",
                    s,
                    EVENT_TYPES.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// An event as stored by the event service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    #[serde(default, with = "optional_date")]
    pub date: Option<NaiveDate>,
    pub timing: String,
    pub organization: String,
    pub description: String,
    #[serde(default, with = "optional_text")]
    pub link: Option<String>,
    #[serde(rename = "organizerId")]
    pub owner_identity: String,
}

/// The body of create and update calls: an event without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    #[serde(default, with = "optional_date")]
    pub date: Option<NaiveDate>,
    pub timing: String,
    pub organization: String,
    pub description: String,
    #[serde(default, with = "optional_text")]
    pub link: Option<String>,
    #[serde(rename = "organizerId")]
    pub owner_identity: String,
}

impl Event {
    pub fn from_draft(id: impl Into<String>, draft: EventDraft) -> Self {
        Event {
            id: id.into(),
            title: draft.title,
            event_type: draft.event_type,
            location: draft.location,
            date: draft.date,
            timing: draft.timing,
            organization: draft.organization,
            description: draft.description,
            link: draft.link,
            owner_identity: draft.owner_identity,
        }
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            event_type: self.event_type,
            location: self.location.clone(),
            date: self.date,
            timing: self.timing.clone(),
            organization: self.organization.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            owner_identity: self.owner_identity.clone(),
        }
    }

    pub fn is_owned_by(&self, identity: &str) -> bool {
        self.owner_identity == identity
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl EventDraft {
    /// Trim every text field; an empty link becomes no link.
    pub fn trimmed(self) -> Self {
        EventDraft {
            title: self.title.trim().to_string(),
            event_type: self.event_type,
            location: self.location.trim().to_string(),
            date: self.date,
            timing: self.timing.trim().to_string(),
            organization: self.organization.trim().to_string(),
            description: self.description.trim().to_string(),
            link: self
                .link
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            owner_identity: self.owner_identity.trim().to_string(),
        }
    }
}

/// `YYYY-MM-DD`, with `""` or `null` meaning no date.
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid date '{s}', expected YYYY-MM-DD"))),
        }
    }
}

/// Optional text where `""` and `null` both mean absent.
mod optional_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(text: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(text.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|s| !s.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_type_from_str_ignores_case() {
        assert_eq!("workshop".parse::<EventType>().unwrap(), EventType::Workshop);
        assert_eq!(" Seminar ".parse::<EventType>().unwrap(), EventType::Seminar);
        assert!("Party".parse::<EventType>().is_err());
    }

    #[test]
    fn test_event_wire_names() {
        let event: Event = serde_json::from_value(json!({
            "id": "1",
            "title": "Rust Night",
            "type": "Hackathon",
            "location": "Hall A",
            "date": "2025-03-20",
            "timing": "6pm - 9pm",
            "organization": "Rust Club",
            "description": "Build things",
            "link": "",
            "organizerId": "club@uni.edu"
        }))
        .unwrap();

        assert_eq!(event.event_type, EventType::Hackathon);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 3, 20));
        assert_eq!(event.link, None);
        assert_eq!(event.owner_identity, "club@uni.edu");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["organizerId"], "club@uni.edu");
        assert_eq!(value["type"], "Hackathon");
        assert_eq!(value["date"], "2025-03-20");
    }

    #[test]
    fn test_missing_date_and_link() {
        let draft: EventDraft = serde_json::from_value(json!({
            "title": "Intro to Git",
            "type": "Workshop",
            "location": "Lab 3",
            "date": null,
            "timing": "",
            "organization": "CS Society",
            "description": "",
            "organizerId": "cs@uni.edu"
        }))
        .unwrap();

        assert_eq!(draft.date, None);
        assert_eq!(draft.link, None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result: Result<EventDraft, _> = serde_json::from_value(json!({
            "title": "x",
            "type": "Workshop",
            "location": "",
            "date": "20/03/2025",
            "timing": "",
            "organization": "",
            "description": "",
            "organizerId": "a@b.c"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_trimmed_draft() {
        let draft = EventDraft {
            title: "  Demo Day ".into(),
            event_type: EventType::Seminar,
            location: " Main Hall".into(),
            date: None,
            timing: "10am ".into(),
            organization: " Org ".into(),
            description: "\tTalks\n".into(),
            link: Some("   ".into()),
            owner_identity: " org@x.com ".into(),
        }
        .trimmed();

        assert_eq!(draft.title, "Demo Day");
        assert_eq!(draft.location, "Main Hall");
        assert_eq!(draft.timing, "10am");
        assert_eq!(draft.description, "Talks");
        assert_eq!(draft.link, None);
        assert_eq!(draft.owner_identity, "org@x.com");
    }
}
