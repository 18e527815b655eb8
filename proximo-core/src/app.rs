//! The front end's controller.
//!
//! `App` owns the view state, router, modal and forms together with a
//! repository, and turns user actions into repository calls and state
//! updates. It never draws anything: after each action the caller reads the
//! view-models back ([`App::student_list`], [`App::modal`], ...) and renders
//! them.
//!
//! Every failed remote call is reported the same way: the action stops, the
//! Error modal opens with the service's message, and the rest of the view
//! state is left as it was. The error is also returned for callers that want
//! to branch on it.

use crate::error::{ProximoError, ProximoResult};
use crate::form::{AuthForm, EventForm};
use crate::modal::{ModalAction, ModalController, ModalSpec};
use crate::render::{OrganizerListView, StudentListView, render_organizer_list, render_student_list};
use crate::repository::{AuthService, EventRepository};
use crate::router::{NavButton, Page, PageRouter};
use crate::session::{LoginRequest, Session, SignupRequest};
use crate::state::{Filter, ViewState};

pub struct App<R> {
    repo: R,
    state: ViewState,
    router: PageRouter,
    modal: ModalController,
    event_form: EventForm,
    auth_form: AuthForm,
}

impl<R> App<R>
where
    R: EventRepository + AuthService,
{
    pub fn new(repo: R) -> Self {
        App {
            repo,
            state: ViewState::new(),
            router: PageRouter::new(),
            modal: ModalController::new(),
            event_form: EventForm::default(),
            auth_form: AuthForm::default(),
        }
    }

    // =========================================================================
    // Read side
    // =========================================================================

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn page(&self) -> Page {
        self.router.current()
    }

    pub fn nav_buttons(&self) -> Vec<NavButton> {
        self.router.nav_buttons()
    }

    pub fn modal(&self) -> Option<&ModalSpec> {
        self.modal.current()
    }

    pub fn event_form(&self) -> &EventForm {
        &self.event_form
    }

    pub fn event_form_mut(&mut self) -> &mut EventForm {
        &mut self.event_form
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    pub fn is_editing(&self) -> bool {
        self.state.edit_cursor().is_some()
    }

    pub fn student_list(&self) -> StudentListView {
        render_student_list(self.state.events(), self.state.filter())
    }

    /// The signed-in organizer's own events; empty without a session.
    pub fn organizer_list(&self) -> OrganizerListView {
        let identity = self.session().map(|s| s.identity.as_str()).unwrap_or("");
        render_organizer_list(self.state.events(), identity)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sign in with the role currently selected on the auth form.
    pub async fn sign_in(&mut self, identity: &str, password: &str) -> ProximoResult<()> {
        let request = LoginRequest::new(identity, password, self.auth_form.role);
        let result = self.repo.login(request).await;
        let session = self.report(result)?;
        self.start_session(session).await
    }

    pub async fn sign_up(&mut self, request: SignupRequest) -> ProximoResult<()> {
        let result = self.repo.signup(request.trimmed()).await;
        let session = self.report(result)?;
        self.start_session(session).await
    }

    async fn start_session(&mut self, session: Session) -> ProximoResult<()> {
        tracing::info!(identity = %session.identity, role = %session.role, "signed in");

        let home = PageRouter::home_for(session.role);
        let welcome = format!("Welcome, {}!", session.display_name);

        self.event_form = EventForm::empty(session.organization.as_deref());
        self.state.end_edit();
        self.state.set_session(session);

        let loaded = self.load_events().await;
        self.router.navigate_to(home);
        loaded?;

        self.modal.open(ModalSpec::notice("Success", welcome));
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.state.session() {
            tracing::info!(identity = %session.identity, "signed out");
        }
        self.state.clear_session();
        self.state.end_edit();
        self.event_form = EventForm::default();
        self.router.navigate_to(Page::Auth);
    }

    /// Show a page. Dashboards need a session; nothing else is checked.
    pub fn navigate(&mut self, page: Page) -> ProximoResult<()> {
        if page.needs_session() && self.state.session().is_none() {
            let result = Err(ProximoError::Auth("Please sign in first".into()));
            return self.report(result);
        }
        self.router.navigate_to(page);
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Re-fetch the whole collection. An edit whose event is gone is
    /// cancelled.
    pub async fn load_events(&mut self) -> ProximoResult<()> {
        let result = self.repo.list_all().await;
        let events = self.report(result)?;
        tracing::debug!(count = events.len(), "events loaded");
        self.state.replace_events(events);

        let stale = self
            .state
            .edit_cursor()
            .filter(|id| self.state.find_event(id).is_none())
            .map(str::to_string);
        if let Some(id) = stale {
            tracing::info!(%id, "edited event no longer exists");
            self.cancel_edit();
        }
        Ok(())
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.state.set_filter(filter);
    }

    /// Point the form at an existing event and pre-fill it.
    pub fn begin_edit(&mut self, id: &str) -> ProximoResult<()> {
        let Some(event) = self.state.find_event(id) else {
            return self.report(Err(ProximoError::event_not_found(id)));
        };

        self.event_form = EventForm::from_event(event);
        self.state.begin_edit(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.state.end_edit();
        self.reset_event_form();
    }

    /// Create a new event, or update the one under the edit cursor.
    pub async fn submit_event_form(&mut self) -> ProximoResult<()> {
        let Some(identity) = self.state.session().map(|s| s.identity.clone()) else {
            return self.report(Err(ProximoError::Auth("Please sign in first".into())));
        };

        let draft = self.event_form.to_draft(&identity);
        let draft = self.report(draft)?;

        let notice = match self.state.edit_cursor().map(str::to_string) {
            Some(id) => {
                let result = self.repo.update(&id, draft).await;
                let event = self.report(result)?;
                tracing::info!(id = %event.id, "event updated");
                ModalSpec::notice("Updated", "Event updated successfully.")
            }
            None => {
                let result = self.repo.create(draft).await;
                let event = self.report(result)?;
                tracing::info!(id = %event.id, "event created");
                ModalSpec::notice("Success", "Event posted!")
            }
        };

        self.modal.open(notice);
        self.state.end_edit();
        self.reset_event_form();
        self.load_events().await
    }

    /// Ask before deleting; the delete runs from [`App::confirm_modal`].
    pub fn request_delete(&mut self, id: &str) {
        self.modal.open(
            ModalSpec::confirmation(
                "Confirm Delete",
                "This cannot be undone!",
                ModalAction::DeleteEvent(id.to_string()),
            )
            .with_confirm_label("Delete"),
        );
    }

    // =========================================================================
    // Modal
    // =========================================================================

    /// Close the modal and run its action, if it has one. A failing action
    /// leaves the confirmation closed and opens the Error modal instead.
    pub async fn confirm_modal(&mut self) -> ProximoResult<()> {
        match self.modal.confirm() {
            Some(ModalAction::DeleteEvent(id)) => self.delete_event(&id).await,
            None => Ok(()),
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.modal.dismiss();
    }

    async fn delete_event(&mut self, id: &str) -> ProximoResult<()> {
        let result = self.repo.delete(id).await;
        self.report(result)?;
        tracing::info!(%id, "event deleted");

        if self.state.edit_cursor() == Some(id) {
            self.cancel_edit();
        }
        self.load_events().await
    }

    fn reset_event_form(&mut self) {
        let organization = self
            .state
            .session()
            .and_then(|s| s.organization.as_deref());
        self.event_form = EventForm::empty(organization);
    }

    /// Surface a failure as the Error modal and pass the result through.
    fn report<T>(&mut self, result: ProximoResult<T>) -> ProximoResult<T> {
        if let Err(err) = &result {
            tracing::warn!(error = %err, "action failed");
            self.modal.open(ModalSpec::error(err));
        }
        result
    }
}
