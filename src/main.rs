use recipe_catalog::{api, config, db::RecipeStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Starting recipe catalog on {}", config.bind_addr());

    // Ensure the parent directory of a file database exists
    let db_path = config
        .database_url
        .strip_prefix("sqlite:")
        .unwrap_or(&config.database_url)
        .trim_start_matches("//");
    if !db_path.starts_with(":memory:")
        && let Some(parent) = std::path::Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let store = RecipeStore::connect(&config.database_url).await?;
    store.init().await?;
    tracing::info!("Database initialized at {}", config.database_url);

    store.seed_if_empty().await?;

    let app = api::router(store);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Recipe catalog listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
