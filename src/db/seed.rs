use sqlx::SqlitePool;

use super::models::{self, NewRecipe};

fn recipe(
    id: i64,
    dish_name: &str,
    cooking_time: i64,
    description: &str,
    ingredients: &[&str],
) -> NewRecipe {
    NewRecipe {
        id: Some(id),
        dish_name: dish_name.to_string(),
        cooking_time,
        description: description.to_string(),
        ingredients: ingredients.iter().map(|name| name.to_string()).collect(),
    }
}

pub fn seed_recipes() -> Vec<NewRecipe> {
    vec![
        recipe(
            1,
            "Салат с огурцом и помидором",
            7,
            "Огурец, помидор, лук помыть и порезать средними кусками. Добавить майонез, соль, перемешать.",
            &["Огурец", "Помидор", "Соль"],
        ),
        recipe(
            2,
            "Жареные пельмени",
            15,
            "Замороженные пельмени выложить на сковороду, смазанную сливочным маслом. Жарить 15 минут с обеих сторон на среднем огне.",
            &["Пельмени", "Сливочное масло"],
        ),
        recipe(
            3,
            "Каша овсяная",
            25,
            "В кастрюлю положить овсянку с молоком в соотношении 1:3, варить 20 мин на слабом огне. Выключить огонь, дать постоять 5 минут под крышкой. Добавить кусок масла.",
            &["Овсяные хлопья", "Молоко", "Сливочное масло"],
        ),
    ]
}

/// Inserts the fixed catalog when the recipes table has no rows. Returns
/// whether anything was inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if models::has_recipes(&mut tx).await? {
        tracing::info!("Recipes already present, skipping seed");
        return Ok(false);
    }

    let ids = models::insert_recipes(&mut tx, &seed_recipes()).await?;
    tx.commit().await?;

    tracing::info!("Seeded {} recipes", ids.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::db::RecipeStore;

    #[tokio::test]
    async fn seeds_once() {
        let store = RecipeStore::in_memory().await.unwrap();
        store.init().await.unwrap();

        assert!(store.seed_if_empty().await.unwrap());
        assert!(!store.seed_if_empty().await.unwrap());

        let recipes = store.list_recipes().await.unwrap();
        assert_eq!(recipes.len(), 3);
        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ingredients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(ingredients, 7);
    }

    #[tokio::test]
    async fn butter_is_shared_between_recipes() {
        let store = RecipeStore::in_memory().await.unwrap();
        store.init().await.unwrap();
        store.seed_if_empty().await.unwrap();

        let pelmeni = store.view_recipe(2).await.unwrap().unwrap();
        let porridge = store.view_recipe(3).await.unwrap().unwrap();
        assert_eq!(pelmeni.ingredients[1].name, "Сливочное масло");
        assert_eq!(pelmeni.ingredients[1].id, porridge.ingredients[2].id);
    }
}
