use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use std::sync::Arc;

use crate::api::AppState;
use crate::api::schemas::{RecipeDetails, RecipeSummary};
use crate::error::ApiError;

/// Return list of recipes
///
/// Recipes ranked by views, then by shortest cooking time.
#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "Recipes",
    responses(
        (status = 200, description = "Ranked recipe list", body = Vec<RecipeSummary>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecipeSummary>>, ApiError> {
    let recipes = state.store.list_recipes().await?;
    Ok(Json(recipes.into_iter().map(RecipeSummary::from).collect()))
}

/// Return one recipe
///
/// Recipe details. Every successful call counts as one view.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeDetails),
        (status = 404, description = "No recipe with this id"),
        (status = 422, description = "Id is not an integer"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<RecipeDetails>, ApiError> {
    let id: i64 = raw_id.parse().map_err(|_| ApiError::InvalidId(raw_id))?;

    let found = state
        .store
        .view_recipe(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    tracing::debug!(
        "Recipe {} viewed, count now {}",
        id,
        found.recipe.number_of_views
    );

    Ok(Json(RecipeDetails::from(found)))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is running")
    )
)]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "recipe_catalog"
    }))
}
