//! Page routing: exactly one page is visible at a time.

use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Auth,
    StudentDashboard,
    OrganizerDashboard,
    Help,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Auth,
        Page::StudentDashboard,
        Page::OrganizerDashboard,
        Page::Help,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Auth => "Sign In",
            Page::StudentDashboard => "Events",
            Page::OrganizerDashboard => "My Events",
            Page::Help => "Help",
        }
    }

    /// Dashboard pages show session data.
    pub fn needs_session(&self) -> bool {
        matches!(self, Page::StudentDashboard | Page::OrganizerDashboard)
    }
}

/// A navigation button and whether it carries the active indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct PageRouter {
    current: Page,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate_to(&mut self, page: Page) {
        tracing::debug!(from = ?self.current, to = ?page, "navigate");
        self.current = page;
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn nav_buttons(&self) -> Vec<NavButton> {
        Page::ALL
            .iter()
            .map(|&page| NavButton {
                page,
                label: page.label(),
                active: page == self.current,
            })
            .collect()
    }

    /// The dashboard a freshly signed-in user lands on.
    pub fn home_for(role: Role) -> Page {
        match role {
            Role::Student => Page::StudentDashboard,
            Role::Organizer => Page::OrganizerDashboard,
        }
    }
}
