// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::domains::auth::JwtService;
use server_core::server::build_app;
use server_core::store::{MongoEmployeeStore, MongoUserStore};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Employee Directory API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to MongoDB...");
    let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let database = client.database(&config.mongodb_db);
    tracing::info!("MongoDB connected");

    let employees = Arc::new(MongoEmployeeStore::new(database.clone()));
    let users = Arc::new(MongoUserStore::new(database));

    employees
        .ensure_indexes()
        .await
        .context("Failed to create employee indexes")?;
    users
        .ensure_indexes()
        .await
        .context("Failed to create user indexes")?;
    tracing::info!("Indexes ensured");

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));

    // Build application
    let app = build_app(employees, users, jwt_service);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL endpoint: http://localhost:{}/graphql", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
