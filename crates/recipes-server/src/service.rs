//! RecipeService: the single coordinator between HTTP handlers and the
//! recipe store.
//!
//! Handlers are thin wrappers that acquire the shared lock in
//! [`AppState`](crate::state::AppState) and delegate to these methods. The
//! service owns the store; nothing else holds recipe data.

use std::path::Path;

use recipes_core::{Recipe, RecipeDraft, RecipeId};
use recipes_storage::{load_seed_file, InMemoryStore, RecipeStore};

use crate::error::ApiError;

/// Owns the recipe collection and exposes the API operations over it.
#[derive(Debug)]
pub struct RecipeService {
    store: InMemoryStore,
}

impl RecipeService {
    /// Wraps an existing store.
    pub fn new(store: InMemoryStore) -> Self {
        RecipeService { store }
    }

    /// Creates a service with an empty store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// Creates a service seeded from the JSON file at `path`.
    ///
    /// A missing or malformed file leaves the collection empty.
    pub fn seeded(path: &Path) -> Self {
        let mut store = InMemoryStore::new();
        let admitted = store.admit_seed(load_seed_file(path));
        tracing::info!(path = %path.display(), recipes = admitted, "seeded recipe store");
        Self::new(store)
    }

    pub fn create_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe, ApiError> {
        let recipe = self.store.create(draft)?;
        tracing::info!(id = %recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    pub fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let recipes = self.store.list()?;
        tracing::debug!(count = recipes.len(), "listed recipes");
        Ok(recipes)
    }

    pub fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        Ok(self.store.get(id)?)
    }

    /// Replaces a recipe's content. The id and publication time are kept.
    pub fn update_recipe(&mut self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe, ApiError> {
        let recipe = self.store.update(id, draft)?;
        tracing::info!(%id, name = %recipe.name, "recipe updated");
        Ok(recipe)
    }

    /// Deletes a recipe and returns its name.
    pub fn delete_recipe(&mut self, id: &RecipeId) -> Result<String, ApiError> {
        let name = self.store.delete(id)?;
        tracing::info!(%id, %name, "recipe deleted");
        Ok(name)
    }

    pub fn search_recipes(&self, tag: &str) -> Result<Vec<Recipe>, ApiError> {
        let results = self.store.search_by_tag(tag)?;
        tracing::debug!(tag, matches = results.len(), "searched recipes by tag");
        Ok(results)
    }

    pub fn recipe_count(&self) -> usize {
        self.store.len()
    }
}
