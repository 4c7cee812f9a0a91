use axum::Json;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::schemas::{RecipeDetails, RecipeSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Catalog API",
        description = "Recipes ranked by popularity, with details and ingredients."
    ),
    paths(handlers::list_recipes, handlers::get_recipe, handlers::health_check),
    components(schemas(RecipeSummary, RecipeDetails)),
    tags(
        (name = "Recipes", description = "Recipe catalog"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
