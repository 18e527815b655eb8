//! Clients for the event collection.
//!
//! [`EventRepository`] and [`AuthService`] are the seam between the view-state
//! model and wherever events actually live. [`HttpRepository`] talks to the
//! event service; [`MemoryRepository`] keeps everything in process and is also
//! what the service itself stores into.

mod http;
mod memory;

pub use http::HttpRepository;
pub use memory::{MemoryRepository, MemoryStore};

use async_trait::async_trait;

use crate::error::ProximoResult;
use crate::event::{Event, EventDraft};
use crate::session::{LoginRequest, Session, SignupRequest};

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every event, in whatever order the collection keeps them.
    async fn list_all(&self) -> ProximoResult<Vec<Event>>;

    async fn list_by_owner(&self, identity: &str) -> ProximoResult<Vec<Event>>;

    /// Persist a new event; the collection assigns its id.
    async fn create(&self, draft: EventDraft) -> ProximoResult<Event>;

    /// Replace every field of an existing event. `NotFound` if `id` is absent.
    async fn update(&self, id: &str, draft: EventDraft) -> ProximoResult<Event>;

    /// Remove an event. `NotFound` if `id` is absent, including when it was
    /// already deleted.
    async fn delete(&self, id: &str) -> ProximoResult<()>;
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: LoginRequest) -> ProximoResult<Session>;

    async fn signup(&self, request: SignupRequest) -> ProximoResult<Session>;
}
