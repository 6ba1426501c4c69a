// src/database.rs
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::store::{DynProductStore, MemoryProductStore, PgProductStore};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS produto (
    id         BIGSERIAL PRIMARY KEY,
    nome       VARCHAR(256) NOT NULL UNIQUE,
    quantidade INTEGER NOT NULL,
    preco      NUMERIC(10, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the product table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Startup hook: connects the configured backend and makes sure the schema
/// is in place.
pub async fn connect(config: &Config) -> Result<DynProductStore> {
    match &config.backend {
        StoreBackend::Postgres(url) => {
            let pool = create_pool(url, config.max_connections)
                .await
                .context("Failed to create database pool")?;
            ensure_schema(&pool)
                .await
                .context("Failed to create product table")?;
            info!(max_connections = config.max_connections, "Connected to PostgreSQL");
            Ok(Arc::new(PgProductStore::new(pool)))
        }
        StoreBackend::Memory => {
            info!("Using in-memory product store");
            Ok(Arc::new(MemoryProductStore::new()))
        }
    }
}
