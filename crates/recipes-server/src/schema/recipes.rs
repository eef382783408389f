//! Recipe request/response types.
//!
//! Request bodies for create and update decode straight into
//! [`RecipeDraft`](recipes_core::RecipeDraft); only the query string and the
//! response envelopes are defined here.

use recipes_core::Recipe;
use serde::{Deserialize, Serialize};

/// Status string reported by successful mutations.
pub const STATUS_SUCCESS: &str = "success";

/// Query parameters for `GET /recipes/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Tag substring to look for. Missing means match everything.
    #[serde(default)]
    pub tag: String,
}

/// Response for listing all recipes.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// Response for a tag search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
}

/// Response for fetching a single recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeResponse {
    pub recipe: Recipe,
}

/// Response from creating or updating a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeMutationResponse {
    pub status: String,
    pub message: String,
    pub recipe: Recipe,
}

impl RecipeMutationResponse {
    pub fn success(message: &str, recipe: Recipe) -> Self {
        RecipeMutationResponse {
            status: STATUS_SUCCESS.to_string(),
            message: message.to_string(),
            recipe,
        }
    }
}

/// Response from deleting a recipe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecipeResponse {
    pub message: String,
    /// Name of the recipe that was removed.
    pub deleted_recipe_name: String,
}
