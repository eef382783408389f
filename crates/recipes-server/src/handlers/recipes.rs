//! Recipe handlers (create, list, get, update, delete, search).

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use recipes_core::{RecipeDraft, RecipeId};

use crate::error::ApiError;
use crate::schema::recipes::{
    DeleteRecipeResponse, RecipeListResponse, RecipeMutationResponse, RecipeResponse,
    SearchParams, SearchResponse,
};
use crate::state::AppState;

/// Lists all recipes.
///
/// `GET /recipes`
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let service = state.service.read().await;
    let recipes = service.list_recipes()?;
    Ok(Json(RecipeListResponse { recipes }))
}

/// Creates a new recipe.
///
/// `POST /recipes`
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<RecipeMutationResponse>), ApiError> {
    let Json(draft) = payload?;
    let recipe = state.service.write().await.create_recipe(draft)?;
    Ok((
        StatusCode::CREATED,
        Json(RecipeMutationResponse::success(
            "Recipe added successfully",
            recipe,
        )),
    ))
}

/// Fetches one recipe by id.
///
/// `GET /recipes/{id}`
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let service = state.service.read().await;
    let recipe = service.get_recipe(&RecipeId(id))?;
    Ok(Json(RecipeResponse { recipe }))
}

/// Replaces the content of an existing recipe.
///
/// `PUT /recipes/{id}`
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Json<RecipeMutationResponse>, ApiError> {
    let Json(draft) = payload?;
    let recipe = state
        .service
        .write()
        .await
        .update_recipe(&RecipeId(id), draft)?;
    Ok(Json(RecipeMutationResponse::success(
        "Recipe updated successfully",
        recipe,
    )))
}

/// Deletes a recipe by id.
///
/// `DELETE /recipes/{id}`
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecipeResponse>, ApiError> {
    let deleted_recipe_name = state.service.write().await.delete_recipe(&RecipeId(id))?;
    Ok(Json(DeleteRecipeResponse {
        message: "recipe has been deleted".to_string(),
        deleted_recipe_name,
    }))
}

/// Finds recipes with a tag containing the `tag` query parameter.
///
/// `GET /recipes/search?tag=...`
pub async fn search_recipes(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params?;
    let service = state.service.read().await;
    let results = service.search_recipes(&params.tag)?;
    Ok(Json(SearchResponse { results }))
}
