//! The interactive front end.
//!
//! Each pass of the loop shows any open modal, draws the current page from
//! the app's view-models and asks what to do next. All state lives in
//! [`App`]; this module only prompts and prints.

use std::time::Duration;

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;
use proximo_core::error::ProximoResult;
use proximo_core::event::EVENT_TYPES;
use proximo_core::form::{AuthMode, EventForm, parse_form_date};
use proximo_core::render::OrganizerCard;
use proximo_core::repository::{AuthService, EventRepository};
use proximo_core::router::Page;
use proximo_core::session::{Role, SignupProfile, SignupRequest};
use proximo_core::state::Filter;
use proximo_core::App;

use crate::commands::chat;
use crate::render::Render;
use crate::utils::tui::with_spinner;

const HELP_TEXT: &str = "\
Proximo lists hackathons, seminars, webinars and workshops posted by campus
organizers.

  Students   Sign in to browse every event. Filter by type, and open an
             event's link to register.
  Organizers Sign in to post events, then edit or delete the ones you
             posted. Other organizers' events are read-only to you.

The assistant answers simple questions about using Proximo.";

/// What the user picked from a page menu.
#[derive(Debug, Clone)]
enum Choice {
    Submit,
    ToggleMode,
    ToggleRole,
    Filter,
    OpenLink,
    Refresh,
    NewEvent,
    SaveEdit,
    EditEvent,
    DeleteEvent,
    CancelEdit,
    Chat,
    Go(Page),
    SignOut,
    Quit,
}

pub async fn run<R>(mut app: App<R>, chat_delay: Duration) -> Result<()>
where
    R: EventRepository + AuthService,
{
    loop {
        show_modal(&mut app).await?;

        println!();
        println!("{}", app.nav_buttons().render());
        if let Some(session) = app.session() {
            println!("{}", session.render());
        }
        println!();

        let choice = match app.page() {
            Page::Auth => auth_page(&app)?,
            Page::StudentDashboard => student_page(&app)?,
            Page::OrganizerDashboard => organizer_page(&app)?,
            Page::Help => help_page(&app)?,
        };

        match choice {
            Choice::Submit => submit_auth(&mut app).await?,
            Choice::ToggleMode => {
                let mode = match app.auth_form().mode {
                    AuthMode::SignIn => AuthMode::SignUp,
                    AuthMode::SignUp => AuthMode::SignIn,
                };
                app.auth_form_mut().set_mode(mode);
            }
            Choice::ToggleRole => {
                let role = other_role(app.auth_form().role);
                app.auth_form_mut().set_role(role);
            }
            Choice::Filter => pick_filter(&mut app)?,
            Choice::OpenLink => open_link(&app)?,
            Choice::Refresh => settle(with_spinner("Fetching events", app.load_events()).await),
            Choice::NewEvent | Choice::SaveEdit => {
                fill_event_form(app.event_form_mut())?;
                settle(with_spinner("Saving event", app.submit_event_form()).await);
            }
            Choice::EditEvent => {
                if let Some(id) = pick_own_event(&app, "Edit which event?")? {
                    settle(app.begin_edit(&id));
                }
            }
            Choice::DeleteEvent => {
                if let Some(id) = pick_own_event(&app, "Delete which event?")? {
                    app.request_delete(&id);
                }
            }
            Choice::CancelEdit => app.cancel_edit(),
            Choice::Chat => chat::converse(chat_delay).await?,
            Choice::Go(page) => settle(app.navigate(page)),
            Choice::SignOut => app.sign_out(),
            Choice::Quit => return Ok(()),
        }
    }
}

/// Failures already opened the Error modal; it shows on the next pass.
fn settle(result: ProximoResult<()>) {
    if let Err(e) = result {
        tracing::debug!(error = %e, "action failed");
    }
}

async fn show_modal<R>(app: &mut App<R>) -> Result<()>
where
    R: EventRepository + AuthService,
{
    while let Some(spec) = app.modal().cloned() {
        println!();
        println!("{}", spec.render());

        if !spec.is_confirmable() {
            app.dismiss_modal();
            continue;
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("  {}?", spec.confirm_label))
            .default(false)
            .interact()?;

        if confirmed {
            settle(with_spinner("Working", app.confirm_modal()).await);
        } else {
            app.dismiss_modal();
        }
    }

    Ok(())
}

/// Build a menu from `(label, choice)` pairs and return the picked choice.
fn menu(prompt: &str, items: Vec<(String, Choice)>) -> Result<Choice> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(items[index].1.clone())
}

/// Navigation to every page except the current one, then sign-out and quit.
fn common_items<R>(app: &App<R>, items: &mut Vec<(String, Choice)>)
where
    R: EventRepository + AuthService,
{
    for button in app.nav_buttons().into_iter().filter(|b| !b.active) {
        items.push((format!("Go to {}", button.label), Choice::Go(button.page)));
    }
    if app.session().is_some() {
        items.push(("Sign out".into(), Choice::SignOut));
    }
    items.push(("Quit".into(), Choice::Quit));
}

// =============================================================================
// Pages
// =============================================================================

fn auth_page<R>(app: &App<R>) -> Result<Choice>
where
    R: EventRepository + AuthService,
{
    let form = app.auth_form();
    println!("{}", form.header().bold());
    println!("{}", form.subheader().dimmed());

    let toggle_mode = match form.mode {
        AuthMode::SignIn => "New here? Create an account",
        AuthMode::SignUp => "Have an account? Sign in",
    };

    let mut items = vec![
        (form.subheader(), Choice::Submit),
        (toggle_mode.to_string(), Choice::ToggleMode),
        (
            format!("Switch to {}", other_role(form.role).label()),
            Choice::ToggleRole,
        ),
        ("Ask the assistant".into(), Choice::Chat),
    ];
    common_items(app, &mut items);

    menu("What next?", items)
}

fn student_page<R>(app: &App<R>) -> Result<Choice>
where
    R: EventRepository + AuthService,
{
    let view = app.student_list();
    println!("{}", view.render());
    println!();

    let mut items = vec![
        (format!("Filter ({})", view.filter), Choice::Filter),
        ("Refresh".into(), Choice::Refresh),
    ];
    if view.cards.iter().any(|c| c.link.is_some()) {
        items.insert(1, ("Open an event link".into(), Choice::OpenLink));
    }
    items.push(("Ask the assistant".into(), Choice::Chat));
    common_items(app, &mut items);

    menu("What next?", items)
}

fn organizer_page<R>(app: &App<R>) -> Result<Choice>
where
    R: EventRepository + AuthService,
{
    let view = app.organizer_list();
    println!("{}", view.render());
    println!();

    let mut items = Vec::new();
    if let Some(title) = editing_label(app) {
        println!("{}", format!("Editing: {title}").yellow());
        items.push(("Save changes".into(), Choice::SaveEdit));
        items.push(("Cancel edit".into(), Choice::CancelEdit));
    } else {
        items.push(("Post a new event".into(), Choice::NewEvent));
    }

    if !view.is_empty() {
        items.push(("Edit an event".into(), Choice::EditEvent));
        items.push(("Delete an event".into(), Choice::DeleteEvent));
    }
    items.push(("Refresh".into(), Choice::Refresh));
    items.push(("Ask the assistant".into(), Choice::Chat));
    common_items(app, &mut items);

    menu("What next?", items)
}

fn help_page<R>(app: &App<R>) -> Result<Choice>
where
    R: EventRepository + AuthService,
{
    println!("{}", "Help".bold());
    println!("{HELP_TEXT}");
    println!();

    let mut items = vec![("Ask the assistant".into(), Choice::Chat)];
    common_items(app, &mut items);

    menu("What next?", items)
}

// =============================================================================
// Actions
// =============================================================================

async fn submit_auth<R>(app: &mut App<R>) -> Result<()>
where
    R: EventRepository + AuthService,
{
    let form = *app.auth_form();

    let identity: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = rpassword::prompt_password("  Password: ")?;

    if form.mode == AuthMode::SignIn {
        settle(with_spinner("Signing in", app.sign_in(&identity, &password)).await);
        return Ok(());
    }

    let phone: String = Input::new().with_prompt("  Phone").interact_text()?;

    let profile = if form.shows_student_fields() {
        SignupProfile::Student {
            name: Input::new().with_prompt("  Name").interact_text()?,
            age: optional("  Age")?,
            gender: optional("  Gender")?,
            college: optional("  College")?,
        }
    } else {
        SignupProfile::Organizer {
            organization: Input::new().with_prompt("  Organization").interact_text()?,
        }
    };

    let request = SignupRequest {
        identity,
        password,
        phone,
        profile,
    };
    settle(with_spinner("Creating account", app.sign_up(request)).await);

    Ok(())
}

fn pick_filter<R>(app: &mut App<R>) -> Result<()>
where
    R: EventRepository + AuthService,
{
    let options = Filter::options();
    let labels: Vec<String> = options.iter().map(Filter::to_string).collect();
    let current = options
        .iter()
        .position(|f| *f == app.state().filter())
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Show")
        .items(&labels)
        .default(current)
        .interact()?;

    app.select_filter(options[index]);
    Ok(())
}

fn open_link<R>(app: &App<R>) -> Result<()>
where
    R: EventRepository + AuthService,
{
    let cards: Vec<_> = app
        .student_list()
        .cards
        .into_iter()
        .filter(|c| c.link.is_some())
        .collect();
    if cards.is_empty() {
        return Ok(());
    }

    let labels: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    let index = Select::new()
        .with_prompt("Open which event?")
        .items(&labels)
        .default(0)
        .interact()?;

    let Some(link) = cards[index].link.as_deref() else {
        return Ok(());
    };

    match url::Url::parse(link) {
        Ok(url) => {
            if let Err(e) = open::that(url.as_str()) {
                eprintln!("  {}", format!("Could not open browser: {e}").red());
                println!("  {}", url.as_str());
            }
        }
        Err(e) => eprintln!("  {}", format!("Invalid link '{link}': {e}").red()),
    }

    Ok(())
}

fn pick_own_event<R>(app: &App<R>, prompt: &str) -> Result<Option<String>>
where
    R: EventRepository + AuthService,
{
    let cards: Vec<OrganizerCard> = app.organizer_list().cards;
    if cards.is_empty() {
        return Ok(None);
    }

    let labels: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(index.map(|i| cards[i].id.clone()))
}

/// Prompt for every field, starting from what the form already holds.
fn fill_event_form(form: &mut EventForm) -> Result<()> {
    form.title = prefilled("  Title", &form.title)?;

    let current = EVENT_TYPES
        .iter()
        .position(|t| *t == form.event_type)
        .unwrap_or(0);
    let labels: Vec<&str> = EVENT_TYPES.iter().map(|t| t.as_str()).collect();
    let index = Select::new()
        .with_prompt("  Type")
        .items(&labels)
        .default(current)
        .interact()?;
    form.event_type = EVENT_TYPES[index];

    form.location = prefilled("  Location", &form.location)?;
    form.date = loop {
        let input = prefilled("  Date (YYYY-MM-DD, optional)", &form.date)?;
        match parse_form_date(&input) {
            Ok(_) => break input,
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    };
    form.timing = prefilled("  Time", &form.timing)?;
    form.organization = prefilled("  Organization", &form.organization)?;
    form.link = prefilled("  Link (optional)", &form.link)?;
    form.description = prefilled("  Description", &form.description)?;

    Ok(())
}

fn prefilled(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

fn optional(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Title of the event being edited, or its id when it is no longer listed.
fn editing_label<R>(app: &App<R>) -> Option<String>
where
    R: EventRepository + AuthService,
{
    let id = app.state().edit_cursor()?;
    let label = app
        .state()
        .find_event(id)
        .map(|e| e.title.clone())
        .unwrap_or_else(|| id.to_string());
    Some(label)
}

fn other_role(role: Role) -> Role {
    match role {
        Role::Student => Role::Organizer,
        Role::Organizer => Role::Student,
    }
}
