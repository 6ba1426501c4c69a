// src/services/stock.rs
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::models::product::Product;
use crate::store::{ProductStore, StoreError};

const RETRY_BACKOFF: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Sale,
    Purchase,
}

impl Movement {
    fn delta(self, quantity: i32) -> i32 {
        match self {
            Movement::Sale => -quantity,
            Movement::Purchase => quantity,
        }
    }
}

/// Removes `quantity` units from stock. Stock may go below zero.
pub async fn sell(
    store: &dyn ProductStore,
    id: i64,
    quantity: i32,
    attempts: u32,
) -> Result<Product, AppError> {
    adjust(store, id, Movement::Sale, quantity, attempts).await
}

/// Adds `quantity` units to stock.
pub async fn buy(
    store: &dyn ProductStore,
    id: i64,
    quantity: i32,
    attempts: u32,
) -> Result<Product, AppError> {
    adjust(store, id, Movement::Purchase, quantity, attempts).await
}

#[instrument(skip(store, attempts))]
async fn adjust(
    store: &dyn ProductStore,
    id: i64,
    movement: Movement,
    quantity: i32,
    attempts: u32,
) -> Result<Product, AppError> {
    if quantity <= 0 {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }
    let delta = movement.delta(quantity);
    let attempts = attempts.max(1);

    let mut attempt = 1;
    loop {
        match store.adjust_quantity(id, delta).await {
            Ok(Some(product)) => {
                info!(new_quantity = product.quantity, "Stock adjusted");
                return Ok(product);
            }
            Ok(None) => return Err(AppError::not_found(format!("Product {id} not found"))),
            Err(e) if e.is_retryable() && attempt < attempts => {
                warn!(attempt, error = %e, "Stock adjustment conflicted, retrying");
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(map_store_error(e)),
        }
    }
}

fn map_store_error(err: StoreError) -> AppError {
    match err {
        StoreError::Retryable(_) => {
            AppError::conflict("Concurrent stock update, please retry")
        }
        other => other.into(),
    }
}
