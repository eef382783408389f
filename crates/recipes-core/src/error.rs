//! Validation errors for recipe payloads.

use thiserror::Error;

/// Reasons a [`RecipeDraft`](crate::RecipeDraft) is rejected.
///
/// Only `name` is validated. Tags, ingredients and instructions are opaque
/// sequences and any content is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The recipe name is empty or only whitespace.
    #[error("recipe name must not be empty")]
    EmptyName,
}
