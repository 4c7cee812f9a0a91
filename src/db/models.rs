use std::collections::{HashMap, HashSet};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub dish_name: String,
    pub number_of_views: i64,
    pub cooking_time: i64,
    pub description: String,
}

impl Recipe {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Recipe {
            id: row.try_get("id")?,
            dish_name: row.try_get("dish_name")?,
            number_of_views: row.try_get("number_of_views")?,
            cooking_time: row.try_get("cooking_time")?,
            description: row.try_get("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

/// A recipe loaded together with its ingredients, in association order.
#[derive(Debug, Clone)]
pub struct RecipeWithIngredients {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}

/// Insert payload. Ingredients are referenced by name; each distinct name
/// becomes one `ingredients` row per [`insert_recipes`] batch.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub id: Option<i64>,
    pub dish_name: String,
    pub cooking_time: i64,
    pub description: String,
    pub ingredients: Vec<String>,
}

pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let schema = include_str!("schema.sql");
    sqlx::raw_sql(schema).execute(pool).await?;
    Ok(())
}

pub async fn list_recipes(pool: &SqlitePool) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, dish_name, number_of_views, cooking_time, description
        FROM recipes
        ORDER BY number_of_views DESC, cooking_time ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(Recipe::from_row).collect()
}

pub async fn find_recipe(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, dish_name, number_of_views, cooking_time, description
        FROM recipes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let recipe = Recipe::from_row(&row)?;

    // rowid of the join table follows link insertion order
    let rows = sqlx::query(
        r#"
        SELECT i.id, i.name
        FROM recipes_ingredients ri
        JOIN ingredients i ON i.id = ri.ingredient_id
        WHERE ri.recipe_id = ?
        ORDER BY ri.rowid
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    let mut ingredients = Vec::with_capacity(rows.len());
    for row in rows {
        ingredients.push(Ingredient {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        });
    }

    Ok(Some(RecipeWithIngredients {
        recipe,
        ingredients,
    }))
}

/// Bumps the view counter by one and returns the new value, or `None` when
/// no recipe has this id.
pub async fn increment_views(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE recipes
        SET number_of_views = number_of_views + 1
        WHERE id = ?
        RETURNING number_of_views
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(|row| row.try_get("number_of_views")).transpose()
}

pub async fn has_recipes(conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT id FROM recipes LIMIT 1")
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

pub async fn insert_recipes(
    conn: &mut SqliteConnection,
    recipes: &[NewRecipe],
) -> Result<Vec<i64>, sqlx::Error> {
    let mut ingredient_ids: HashMap<&str, i64> = HashMap::new();
    let mut recipe_ids = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        let recipe_id = sqlx::query(
            r#"
            INSERT INTO recipes (id, dish_name, number_of_views, cooking_time, description)
            VALUES (?, ?, 0, ?, ?)
            "#,
        )
        .bind(recipe.id)
        .bind(&recipe.dish_name)
        .bind(recipe.cooking_time)
        .bind(&recipe.description)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        let mut linked = HashSet::new();
        for name in &recipe.ingredients {
            let ingredient_id = match ingredient_ids.get(name.as_str()) {
                Some(id) => *id,
                None => {
                    let id = sqlx::query("INSERT INTO ingredients (name) VALUES (?)")
                        .bind(name)
                        .execute(&mut *conn)
                        .await?
                        .last_insert_rowid();
                    ingredient_ids.insert(name.as_str(), id);
                    id
                }
            };

            if !linked.insert(ingredient_id) {
                continue;
            }

            sqlx::query("INSERT INTO recipes_ingredients (recipe_id, ingredient_id) VALUES (?, ?)")
                .bind(recipe_id)
                .bind(ingredient_id)
                .execute(&mut *conn)
                .await?;
        }

        recipe_ids.push(recipe_id);
    }

    Ok(recipe_ids)
}
