//! Core types for proximo.
//!
//! This crate holds everything the front end and the event service share:
//! - `Event`, `Session` and the request types that travel over the wire
//! - the view-state model (`state`, `router`, `modal`, `form`, `render`)
//! - `repository` clients for the event service (HTTP and in-memory)
//! - `App`, which wires user actions to repository calls and state updates

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod escape;
pub mod event;
pub mod form;
pub mod modal;
pub mod protocol;
pub mod render;
pub mod repository;
pub mod router;
pub mod session;
pub mod state;

pub use app::App;
pub use error::{ProximoError, ProximoResult};
pub use event::{Event, EventDraft, EventType};
pub use session::{Role, Session};
