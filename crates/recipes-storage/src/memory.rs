//! In-memory implementation of [`RecipeStore`].
//!
//! [`InMemoryStore`] keeps every recipe in an insertion-ordered map keyed by
//! id. The map is at once the backing sequence and the id index, so lookups
//! by id are O(1) on average and the index can never disagree with the
//! stored records.

use indexmap::IndexMap;

use recipes_core::{fold_case, Recipe, RecipeDraft, RecipeId};

use crate::error::StorageError;
use crate::seed::SeedRecipe;
use crate::source::{Clock, IdSource, SystemClock, UuidIdSource};
use crate::traits::RecipeStore;

/// How many times `create` asks the id source for an unused id.
const MAX_ID_ATTEMPTS: usize = 8;

/// In-memory implementation of [`RecipeStore`].
#[derive(Debug)]
pub struct InMemoryStore {
    recipes: IndexMap<RecipeId, Recipe>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl InMemoryStore {
    /// Creates an empty store with random ids and the system clock.
    pub fn new() -> Self {
        Self::with_sources(UuidIdSource, SystemClock)
    }

    /// Creates an empty store with the given id source and clock.
    pub fn with_sources(ids: impl IdSource + 'static, clock: impl Clock + 'static) -> Self {
        InMemoryStore {
            recipes: IndexMap::new(),
            ids: Box::new(ids),
            clock: Box::new(clock),
        }
    }

    /// Admits seed records into the store, returning how many were kept.
    ///
    /// Records with an empty id get a fresh one. A record whose id is
    /// already present is skipped. A missing `published_at` becomes now.
    pub fn admit_seed(&mut self, records: Vec<SeedRecipe>) -> usize {
        let mut admitted = 0;
        for record in records {
            let id = if record.id.is_empty() {
                match self.fresh_id() {
                    Ok(id) => id,
                    Err(err) => {
                        tracing::warn!(error = %err, name = %record.content.name, "skipping seed recipe");
                        continue;
                    }
                }
            } else {
                RecipeId(record.id)
            };

            if self.recipes.contains_key(&id) {
                tracing::warn!(%id, "skipping seed recipe with duplicate id");
                continue;
            }

            let published_at = record.published_at.unwrap_or_else(|| self.clock.now());
            let recipe = Recipe::from_draft(id.clone(), record.content, published_at);
            self.recipes.insert(id, recipe);
            admitted += 1;
        }
        admitted
    }

    /// Draws ids until one is non-empty and not already in use.
    fn fresh_id(&self) -> Result<RecipeId, StorageError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !id.is_empty() && !self.recipes.contains_key(&id) {
                return Ok(id);
            }
            tracing::debug!(%id, "id source returned an unusable id, drawing again");
        }
        Err(StorageError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore for InMemoryStore {
    fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, StorageError> {
        draft.validate()?;
        let id = self.fresh_id()?;
        let recipe = Recipe::from_draft(id.clone(), draft, self.clock.now());
        self.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    fn list(&self) -> Result<Vec<Recipe>, StorageError> {
        Ok(self.recipes.values().cloned().collect())
    }

    fn get(&self, id: &RecipeId) -> Result<Recipe, StorageError> {
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn update(&mut self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe, StorageError> {
        draft.validate()?;
        let recipe = self
            .recipes
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.clone()))?;
        recipe.replace_content(draft);
        Ok(recipe.clone())
    }

    fn delete(&mut self, id: &RecipeId) -> Result<String, StorageError> {
        // shift_remove keeps the remaining entries in insertion order.
        self.recipes
            .shift_remove(id)
            .map(|recipe| recipe.name)
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn search_by_tag(&self, query: &str) -> Result<Vec<Recipe>, StorageError> {
        let query = fold_case(query);
        Ok(self
            .recipes
            .values()
            .filter(|recipe| recipe.has_tag_matching_folded(&query))
            .cloned()
            .collect())
    }

    fn len(&self) -> usize {
        self.recipes.len()
    }
}
