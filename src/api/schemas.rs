use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::{Recipe, RecipeWithIngredients};

/// Entry of the ranked recipe list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub id: i64,
    /// Название блюда
    #[schema(example = "Жареные пельмени")]
    pub dish_name: String,
    /// Время приготовления, мин
    #[schema(example = 15)]
    pub cooking_time: i64,
    /// Количество просмотров рецепта
    pub number_of_views: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetails {
    /// Название блюда
    pub dish_name: String,
    /// Время приготовления, мин
    pub cooking_time: i64,
    /// Описание рецепта
    pub description: String,
    /// Список ингредиентов
    pub ingredient_list: Vec<String>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            dish_name: recipe.dish_name,
            cooking_time: recipe.cooking_time,
            number_of_views: recipe.number_of_views,
        }
    }
}

impl From<RecipeWithIngredients> for RecipeDetails {
    fn from(found: RecipeWithIngredients) -> Self {
        Self {
            dish_name: found.recipe.dish_name,
            cooking_time: found.recipe.cooking_time,
            description: found.recipe.description,
            ingredient_list: found
                .ingredients
                .into_iter()
                .map(|ingredient| ingredient.name)
                .collect(),
        }
    }
}
