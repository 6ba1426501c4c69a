// src/store/postgres.rs
use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use tracing::debug;

use super::{quantity_overflow, ProductStore, StoreError};
use crate::models::product::{NewProduct, Product, ProductChanges};

const SELECT_PRODUCT: &str = "SELECT id, nome AS name, quantidade AS quantity,
                preco::FLOAT8 AS price, created_at
         FROM produto";

const RETURNING_PRODUCT: &str = "RETURNING id, nome AS name, quantidade AS quantity,
                preco::FLOAT8 AS price, created_at";

fn map_sqlx_error(err: SqlxError, name: Option<&str>) -> StoreError {
    let code = err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some("23505") => StoreError::DuplicateName(name.unwrap_or_default().to_string()),
        Some("40001") | Some("40P01") => StoreError::Retryable(err),
        // numeric_value_out_of_range
        Some("22003") => StoreError::OutOfRange(err.to_string()),
        _ => StoreError::Unavailable(err),
    }
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO produto (nome, quantidade, preco)
             VALUES ($1, $2, $3::FLOAT8) {RETURNING_PRODUCT}"
        ))
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Some(&product.name)))
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))
    }

    async fn update(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let rename = changes.name.clone();
        let err = |e| map_sqlx_error(e, rename.as_deref());

        let mut tx = self.pool.begin().await.map_err(err)?;

        let current = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCT} WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(err)?;

        let Some(mut product) = current else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };
        product.apply(changes);

        let updated = sqlx::query_as::<_, Product>(&format!(
            "UPDATE produto SET nome = $1, quantidade = $2, preco = $3::FLOAT8
             WHERE id = $4 {RETURNING_PRODUCT}"
        ))
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(err)?;

        tx.commit().await.map_err(err)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM produto WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(result.rows_affected() > 0)
    }

    async fn adjust_quantity(&self, id: i64, delta: i32) -> Result<Option<Product>, StoreError> {
        let err = |e| map_sqlx_error(e, None);
        let mut tx = self.pool.begin().await.map_err(err)?;

        let current: Option<(i32,)> =
            sqlx::query_as("SELECT quantidade FROM produto WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(err)?;

        let Some((quantity,)) = current else {
            return Ok(None);
        };
        let new_quantity = quantity
            .checked_add(delta)
            .ok_or_else(|| quantity_overflow(id, quantity, delta))?;
        debug!(id, quantity, delta, new_quantity, "Adjusting stock");

        let updated = sqlx::query_as::<_, Product>(&format!(
            "UPDATE produto SET quantidade = $1 WHERE id = $2 {RETURNING_PRODUCT}"
        ))
        .bind(new_quantity)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(err)?;

        tx.commit().await.map_err(err)?;
        Ok(Some(updated))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
