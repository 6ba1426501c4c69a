// src/store/memory.rs
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{quantity_overflow, ProductStore, StoreError};
use crate::models::product::{NewProduct, Product, ProductChanges};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

/// Process-local product table. Every operation holds the table lock for its
/// whole read-modify-write, so adjustments to one id are serialized.
#[derive(Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut table = self.table.write().await;
        if table.name_taken(&product.name, None) {
            return Err(StoreError::DuplicateName(product.name));
        }

        table.next_id += 1;
        let stored = Product {
            id: table.next_id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            created_at: Some(Utc::now()),
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(name) = &changes.name {
            if table.name_taken(name, Some(id)) {
                return Err(StoreError::DuplicateName(name.clone()));
            }
        }

        Ok(table.rows.get_mut(&id).map(|product| {
            product.apply(changes);
            product.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn adjust_quantity(&self, id: i64, delta: i32) -> Result<Option<Product>, StoreError> {
        let mut table = self.table.write().await;
        let Some(product) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        let current = product.quantity;
        product.quantity = current
            .checked_add(delta)
            .ok_or_else(|| quantity_overflow(id, current, delta))?;
        Ok(Some(product.clone()))
    }

    async fn close(&self) {}
}
