use proximo_core::repository::{MemoryRepository, MemoryStore};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    repo: MemoryRepository,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        AppState {
            repo: MemoryRepository::new(store),
        }
    }

    pub fn repo(&self) -> &MemoryRepository {
        &self.repo
    }
}
