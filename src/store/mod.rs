//! Product persistence.
//!
//! Handlers and services only see [`ProductStore`]; the concrete backend is
//! picked once at startup and shared through `AppState`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::product::{NewProduct, Product, ProductChanges};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

pub type DynProductStore = Arc<dyn ProductStore>;

pub(crate) fn quantity_overflow(id: i64, quantity: i32, delta: i32) -> StoreError {
    StoreError::OutOfRange(format!(
        "quantity of product {id} would overflow ({quantity} {delta:+})"
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product name already exists: {0}")]
    DuplicateName(String),
    /// A value does not fit its column; nothing was written.
    #[error("value out of range: {0}")]
    OutOfRange(String),
    /// Serialization failure or deadlock; the whole operation may be retried.
    #[error("transaction conflict: {0}")]
    Retryable(#[source] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Retryable(_))
    }
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Stores a new product and returns it with its assigned id.
    ///
    /// Fails with [`StoreError::DuplicateName`] when the name is taken.
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// All products, in insertion order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Merges `changes` into the stored product under a row lock.
    ///
    /// Returns `None` when no product has this id.
    async fn update(&self, id: i64, changes: ProductChanges)
        -> Result<Option<Product>, StoreError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Adds `delta` (which may be negative) to the stored quantity in a
    /// single read-modify-write transaction.
    ///
    /// Fails with [`StoreError::OutOfRange`] and leaves the row untouched when
    /// the result does not fit in an `i32`.
    async fn adjust_quantity(&self, id: i64, delta: i32) -> Result<Option<Product>, StoreError>;

    async fn close(&self);
}
