//! Storage error types for recipes-storage.
//!
//! Every failing store operation leaves the collection exactly as it was
//! before the call.

use std::path::PathBuf;

use recipes_core::{RecipeId, ValidationError};
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No recipe with the given id exists.
    #[error("recipe not found: {0}")]
    NotFound(RecipeId),

    /// The supplied draft failed validation.
    #[error("invalid recipe: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The id source kept producing ids that are already taken.
    #[error("could not allocate a unique recipe id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    /// The seed file could not be read or decoded.
    #[error("seed file {}: {reason}", path.display())]
    Seed { path: PathBuf, reason: String },
}
