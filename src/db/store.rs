use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::models::{self, Recipe, RecipeWithIngredients};
use super::seed;

/// Storage client handed to the HTTP layer at startup.
#[derive(Clone, Debug)]
pub struct RecipeStore {
    pool: SqlitePool,
}

impl RecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Private in-memory database. A single connection that never idles out
    /// keeps the data alive for the lifetime of the store.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn init(&self) -> Result<(), sqlx::Error> {
        models::init_db(&self.pool).await
    }

    pub async fn seed_if_empty(&self) -> Result<bool, sqlx::Error> {
        seed::seed_if_empty(&self.pool).await
    }

    /// Opens a unit of work. Dropping the transaction without `commit` rolls
    /// it back, so every early return or `?` releases it cleanly.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        models::list_recipes(&self.pool).await
    }

    /// Records one view and loads the recipe with its ingredients, all in one
    /// transaction. Returns `None` without touching any counter when the id
    /// is unknown.
    pub async fn view_recipe(&self, id: i64) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let mut tx = self.begin().await?;

        // Write first: a deferred transaction that has already read cannot
        // wait for the write lock and fails with SQLITE_BUSY instead.
        if models::increment_views(&mut tx, id).await?.is_none() {
            return Ok(None);
        }

        let found = models::find_recipe(&mut tx, id).await?;

        tx.commit().await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::NewRecipe;

    async fn store() -> RecipeStore {
        let store = RecipeStore::in_memory().await.unwrap();
        store.init().await.unwrap();
        let mut tx = store.begin().await.unwrap();
        models::insert_recipes(
            &mut tx,
            &[NewRecipe {
                id: Some(1),
                dish_name: "Test".to_string(),
                cooking_time: 7,
                description: "Test".to_string(),
                ingredients: vec!["Test".to_string()],
            }],
        )
        .await
        .unwrap();
        tx.commit().await.unwrap();
        store
    }

    #[tokio::test]
    async fn view_recipe_counts_each_call() {
        let store = store().await;
        for expected in 1..=3 {
            let viewed = store.view_recipe(1).await.unwrap().unwrap();
            assert_eq!(viewed.recipe.number_of_views, expected);
        }
        assert_eq!(store.list_recipes().await.unwrap()[0].number_of_views, 3);
    }

    #[tokio::test]
    async fn view_recipe_unknown_id_changes_nothing() {
        let store = store().await;
        assert!(store.view_recipe(99).await.unwrap().is_none());
        assert_eq!(store.list_recipes().await.unwrap()[0].number_of_views, 0);
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let store = store().await;
        {
            let mut tx = store.begin().await.unwrap();
            models::increment_views(&mut tx, 1).await.unwrap();
        }
        assert_eq!(store.list_recipes().await.unwrap()[0].number_of_views, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_views_on_file_database_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("recipes.db").display());
        let store = RecipeStore::connect(&url).await.unwrap();
        store.init().await.unwrap();
        store.seed_if_empty().await.unwrap();

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.view_recipe(1).await })
            })
            .collect();

        for handle in handles {
            let viewed = handle.await.unwrap().unwrap();
            assert!(viewed.is_some());
        }

        let views = store
            .list_recipes()
            .await
            .unwrap()
            .into_iter()
            .find(|recipe| recipe.id == 1)
            .unwrap()
            .number_of_views;
        assert_eq!(views, 50);
    }

    #[tokio::test]
    async fn init_is_repeatable() {
        let store = store().await;
        store.init().await.unwrap();
        assert_eq!(store.list_recipes().await.unwrap().len(), 1);
    }
}
