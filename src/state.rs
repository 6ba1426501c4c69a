// src/state.rs
use std::sync::Arc;

use crate::store::{DynProductStore, MemoryProductStore};

#[derive(Clone)]
pub struct AppState {
    pub store: DynProductStore,
    pub stock_retry_attempts: u32,
}

impl AppState {
    pub fn new(store: DynProductStore, stock_retry_attempts: u32) -> Self {
        Self {
            store,
            stock_retry_attempts,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryProductStore::new()), 1)
    }
}
