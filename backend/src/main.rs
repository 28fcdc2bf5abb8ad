use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

const MIGRATIONS: diesel_async_migrations::EmbeddedMigrations =
    diesel_async_migrations::embed_migrations!("../migrations/");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("analysis")
        }));
    tracing::subscriber::set_global_default(registry)?;

    let config = backend::config::Config::parse();
    let tracker = config.tracker().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;

    tracing::info!("Starting...");
    tracing::info!(
        players = ?tracker.players,
        civilizations = ?tracker.civilizations,
        "Tracking"
    );

    let store: Box<dyn backend::store::GameStore> = match config.database_url.as_deref() {
        Some(database_url) if !config.in_memory => {
            tracing::info!("Applying Migrations");
            let mut db_con = backend::db_connection(database_url).await?;
            MIGRATIONS
                .run_pending_migrations(&mut db_con)
                .await
                .inspect_err(|e| tracing::error!("Running migrations: {:?}", e))?;
            tracing::info!("Completed Migrations");

            Box::new(backend::store::DieselStore::new(database_url))
        }
        _ => {
            tracing::warn!("Games are only kept in memory");
            Box::new(backend::store::MemoryStore::new())
        }
    };

    let router = axum::Router::new()
        .nest(
            "/api",
            backend::api::router(backend::api::AppState { store, tracker }),
        )
        .fallback_service(tower_http::services::ServeDir::new(&config.frontend_dir));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on {}", config.bind);

    axum::serve(listener, router).await?;

    Ok(())
}
