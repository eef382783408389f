//! Core data model for the recipes service.
//!
//! This crate defines the [`Recipe`] record, the client-supplied
//! [`RecipeDraft`] payload, the [`RecipeId`] identifier, and the draft
//! validation rules. It has no knowledge of storage or HTTP.
//!
//! # Modules
//!
//! - [`id`]: RecipeId newtype
//! - [`recipe`]: Recipe and RecipeDraft, plus case-insensitive tag matching
//! - [`error`]: ValidationError for rejected drafts

pub mod error;
pub mod id;
pub mod recipe;

// Re-export key types for ergonomic use.
pub use error::ValidationError;
pub use id::RecipeId;
pub use recipe::{fold_case, Recipe, RecipeDraft};
