//! The [`RecipeStore`] trait defining the storage contract for recipes.
//!
//! The trait is synchronous: no backend performs I/O while serving a
//! request, and callers serialize access with a lock around the whole store.
//! Mutating methods take `&mut self`, so they can only run while the caller
//! holds exclusive access.

use recipes_core::{Recipe, RecipeDraft, RecipeId};

use crate::error::StorageError;

/// The storage contract for recipes.
pub trait RecipeStore {
    /// Stores a new recipe built from `draft`.
    ///
    /// Assigns a fresh id and sets `published_at` to the current instant.
    /// Returns the fully populated recipe.
    fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, StorageError>;

    /// Returns a snapshot of every stored recipe.
    ///
    /// Callers must not rely on the order of the result.
    fn list(&self) -> Result<Vec<Recipe>, StorageError>;

    /// Retrieves one recipe by id.
    fn get(&self, id: &RecipeId) -> Result<Recipe, StorageError>;

    /// Replaces the content of an existing recipe.
    ///
    /// `id` and `published_at` are preserved. Fails with
    /// [`StorageError::NotFound`] without mutating anything if `id` is unknown.
    fn update(&mut self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe, StorageError>;

    /// Removes a recipe, returning its name.
    fn delete(&mut self, id: &RecipeId) -> Result<String, StorageError>;

    /// Finds recipes with at least one tag containing `query`, ignoring case.
    ///
    /// An empty query matches every recipe. No match yields an empty vector.
    fn search_by_tag(&self, query: &str) -> Result<Vec<Recipe>, StorageError>;

    /// Number of stored recipes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
