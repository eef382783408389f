//! Application state with the shared `RecipeService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::RwLock<>>`. Create,
//! update and delete take the write guard; list, get and search take the
//! read guard. Every store operation therefore runs against a consistent
//! collection: a reader never sees half of a mutation, and two writers never
//! interleave.
//!
//! Store operations are synchronous and short, so guards are dropped before
//! the handler builds its response and are never held across other awaits.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::service::RecipeService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The recipe service. Handlers that change recipes take the write
    /// guard, and handlers that only read take the read guard.
    pub service: Arc<RwLock<RecipeService>>,
}

impl AppState {
    /// Creates the state for a running server, seeding from the configured file.
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_service(RecipeService::seeded(&config.seed_path))
    }

    /// Creates a state with an empty collection (for testing).
    pub fn in_memory() -> Self {
        Self::with_service(RecipeService::in_memory())
    }

    pub fn with_service(service: RecipeService) -> Self {
        AppState {
            service: Arc::new(RwLock::new(service)),
        }
    }
}
