pub mod models;
pub mod seed;
pub mod store;

pub use models::{Ingredient, NewRecipe, Recipe, RecipeWithIngredients, insert_recipes};
pub use store::RecipeStore;
