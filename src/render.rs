//! Terminal rendering for proximo view-models.
//!
//! Extension trait that adds colored output to the records produced by
//! `proximo_core::render` using owo_colors.

use owo_colors::OwoColorize;
use proximo_core::chat::{ChatMessage, Sender};
use proximo_core::modal::ModalSpec;
use proximo_core::render::{EventCard, OrganizerCard, OrganizerListView, StudentListView};
use proximo_core::router::NavButton;
use proximo_core::session::Session;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for NavButton {
    fn render(&self) -> String {
        if self.active {
            format!("[{}]", self.label).bold().cyan().to_string()
        } else {
            format!(" {} ", self.label).dimmed().to_string()
        }
    }
}

impl Render for [NavButton] {
    fn render(&self) -> String {
        self.iter().map(Render::render).collect::<Vec<_>>().join(" ")
    }
}

/// `ORGANIZER · Robotics Society`
impl Render for Session {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.role.label().to_uppercase().yellow().bold(),
            "·".dimmed(),
            self.display_name
        )
    }
}

impl Render for EventCard {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {}",
            format!("[{}]", self.badge).magenta(),
            self.title.bold()
        )];

        if !self.description.is_empty() {
            lines.push(format!("   {}", self.description));
        }

        let when = [self.date.as_str(), self.timing.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !when.is_empty() {
            lines.push(format!("   {}", when.dimmed()));
        }
        if !self.location.is_empty() {
            lines.push(format!("   @ {}", self.location.dimmed()));
        }
        if !self.organization.is_empty() {
            lines.push(format!("   by {}", self.organization.dimmed()));
        }
        if let Some(link) = &self.link {
            lines.push(format!("   {}", link.blue().underline()));
        }

        lines.join("\n")
    }
}

impl Render for OrganizerCard {
    fn render(&self) -> String {
        let mut line = self.title.bold().to_string();
        if !self.description.is_empty() {
            line.push_str(&format!("\n   {}", self.description.dimmed()));
        }
        line
    }
}

impl Render for StudentListView {
    fn render(&self) -> String {
        let header = format!(
            "{} {}",
            "Events".bold(),
            format!("({} shown, filter: {})", self.count_label(), self.filter).dimmed()
        );

        if self.is_empty() {
            return format!("{header}\n  {}", "No events found".dimmed());
        }

        let cards = self
            .cards
            .iter()
            .map(|card| indent(&card.render()))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{header}\n{cards}")
    }
}

impl Render for OrganizerListView {
    fn render(&self) -> String {
        let header = format!(
            "{} {}",
            "My Events".bold(),
            format!("({})", self.count_label()).dimmed()
        );

        if self.is_empty() {
            return format!("{header}\n  {}", "You haven't posted any events yet".dimmed());
        }

        let cards = self
            .cards
            .iter()
            .map(|card| indent(&card.render()))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{header}\n{cards}")
    }
}

impl Render for ModalSpec {
    fn render(&self) -> String {
        let title = if self.title == "Error" {
            self.title.red().bold().to_string()
        } else if self.is_confirmable() {
            self.title.yellow().bold().to_string()
        } else {
            self.title.green().bold().to_string()
        };

        format!("{title}\n  {}", self.body)
    }
}

impl Render for ChatMessage {
    fn render(&self) -> String {
        match self.sender {
            Sender::User => format!("{} {}", "you:".bold(), self.text),
            Sender::Bot => format!("{} {}", "bot:".cyan().bold(), self.text),
        }
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proximo_core::error::ProximoError;
    use proximo_core::state::Filter;

    fn card(link: Option<&str>) -> EventCard {
        EventCard {
            id: "1".into(),
            badge: "Workshop".into(),
            title: "Solder Night".into(),
            description: "Bring a kit".into(),
            location: "Lab 2".into(),
            date: "Thu Mar 20 2025".into(),
            timing: "18:00".into(),
            organization: "Makers".into(),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_card_mentions_link_only_when_present() {
        assert!(card(Some("https://makers.example")).render().contains("https://makers.example"));
        assert_eq!(card(None).render().lines().count(), 5);
    }

    #[test]
    fn test_empty_student_list_shows_placeholder() {
        let view = StudentListView {
            cards: Vec::new(),
            filter: Filter::All,
        };
        assert!(view.render().contains("No events found"));
    }

    #[test]
    fn test_session_line_shows_role_and_name() {
        let session = Session {
            role: proximo_core::session::Role::Organizer,
            display_name: "Robotics Society".into(),
            identity: "robotics@uni.edu".into(),
            organization: Some("Robotics Society".into()),
        };
        let out = session.render();
        assert!(out.contains("ORGANIZER"));
        assert!(out.contains("Robotics Society"));
    }

    #[test]
    fn test_error_modal_shows_message() {
        let spec = ModalSpec::error(&ProximoError::Auth("Invalid email or password".into()));
        let out = spec.render();
        assert!(out.contains("Error"));
        assert!(out.contains("Invalid email or password"));
    }
}
