use anyhow::Result;
use owo_colors::OwoColorize;
use proximo_core::render::render_student_list;
use proximo_core::repository::EventRepository;
use proximo_core::state::Filter;

use crate::render::Render;
use crate::utils::tui::with_spinner;

pub async fn run<R: EventRepository>(repo: &R, filter: Filter, organizer: Option<&str>) -> Result<()> {
    let events = match organizer {
        Some(identity) => with_spinner("Fetching events", repo.list_by_owner(identity)).await?,
        None => with_spinner("Fetching events", repo.list_all()).await?,
    };

    let view = render_student_list(&events, filter);
    println!("{}", view.render());

    if let Some(identity) = organizer {
        println!();
        println!("{}", format!("Posted by {identity}").dimmed());
    }

    Ok(())
}
