pub mod handlers;
pub mod openapi;
pub mod schemas;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::RecipeStore;

pub use schemas::{RecipeDetails, RecipeSummary};

#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
}

pub fn router(store: RecipeStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API documentation
        .route("/openapi.json", get(openapi::openapi_json))
        // Catalog endpoints
        .route("/recipes", get(handlers::list_recipes))
        .route("/recipes/", get(handlers::list_recipes))
        .route("/recipes/{id}", get(handlers::get_recipe))
        .with_state(state)
}
