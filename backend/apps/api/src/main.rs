//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;

use api::app::{build_router, cors_layer};
use api::config::ServerConfig;
use auth::{MemoryAccountRepository, PgAccountRepository};
use customer::{CustomerConfig, MemoryCustomerRepository, PgCustomerRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,customer=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let auth_config = Arc::new(config.auth_config()?);
    let customer_config = Arc::new(CustomerConfig::default());

    let router = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_router(
                PgAccountRepository::new(pool.clone()),
                PgCustomerRepository::new(pool),
                auth_config,
                customer_config,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores");
            build_router(
                MemoryAccountRepository::new(),
                MemoryCustomerRepository::new(),
                auth_config,
                customer_config,
            )
        }
    };

    let app = router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
