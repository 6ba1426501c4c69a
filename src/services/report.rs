// src/services/report.rs
use serde::Serialize;

use crate::error::AppError;
use crate::models::product::{round_cents, Product};
use crate::store::ProductStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockRange {
    #[serde(rename = "Menor quantidade")]
    pub min: i32,
    #[serde(rename = "Maior quantidade")]
    pub max: i32,
}

pub fn total_value(products: &[Product]) -> f64 {
    round_cents(products.iter().map(Product::stock_value).sum())
}

pub fn total_quantity(products: &[Product]) -> i64 {
    products.iter().map(|p| i64::from(p.quantity)).sum()
}

/// `None` for an empty collection.
pub fn stock_range(products: &[Product]) -> Option<StockRange> {
    let min = products.iter().map(|p| p.quantity).min()?;
    let max = products.iter().map(|p| p.quantity).max()?;
    Some(StockRange { min, max })
}

pub async fn inventory_value(store: &dyn ProductStore) -> Result<f64, AppError> {
    Ok(total_value(&store.list().await?))
}

pub async fn inventory_quantity(store: &dyn ProductStore) -> Result<i64, AppError> {
    Ok(total_quantity(&store.list().await?))
}

pub async fn quantity_of(store: &dyn ProductStore, id: i64) -> Result<i32, AppError> {
    store
        .get(id)
        .await?
        .map(|p| p.quantity)
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
}

pub async fn inventory_range(store: &dyn ProductStore) -> Result<StockRange, AppError> {
    stock_range(&store.list().await?)
        .ok_or_else(|| AppError::empty("No products in stock to compute a range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::NewProduct;
    use crate::store::MemoryProductStore;

    fn product(id: i64, quantity: i32, price: f64) -> Product {
        Product {
            id,
            name: format!("p{id}"),
            quantity,
            price,
            created_at: None,
        }
    }

    #[test]
    fn total_value_sums_quantity_times_price() {
        let products = [product(1, 2, 3.0), product(2, 1, 5.0)];
        assert_eq!(total_value(&products), 11.0);
        assert_eq!(total_value(&[]), 0.0);
    }

    #[test]
    fn total_value_is_rounded_to_cents() {
        let products = [product(1, 3, 0.1), product(2, 1, 0.2)];
        assert_eq!(total_value(&products), 0.5);
    }

    #[test]
    fn total_quantity_sums_and_does_not_overflow() {
        assert_eq!(total_quantity(&[]), 0);
        let products = [product(1, i32::MAX, 1.0), product(2, i32::MAX, 1.0)];
        assert_eq!(total_quantity(&products), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn stock_range_finds_min_and_max() {
        let products = [product(1, 5, 1.0), product(2, 1, 1.0), product(3, 9, 1.0)];
        assert_eq!(stock_range(&products), Some(StockRange { min: 1, max: 9 }));
        assert_eq!(stock_range(&[]), None);
    }

    #[test]
    fn stock_range_serializes_with_report_labels() {
        let json = serde_json::to_value(StockRange { min: 1, max: 9 }).unwrap();
        assert_eq!(json["Menor quantidade"], 1);
        assert_eq!(json["Maior quantidade"], 9);
    }

    #[tokio::test]
    async fn empty_store_range_fails_explicitly() {
        let store = MemoryProductStore::new();
        let err = inventory_range(&store).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyCollection(_)));
        assert_eq!(inventory_value(&store).await.unwrap(), 0.0);
        assert_eq!(inventory_quantity(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn quantity_of_missing_id_is_not_found() {
        let store = MemoryProductStore::new();
        let p = store
            .insert(NewProduct {
                name: "Grampo".into(),
                quantity: 40,
                price: 0.1,
            })
            .await
            .unwrap();

        assert_eq!(quantity_of(&store, p.id).await.unwrap(), 40);
        assert!(matches!(quantity_of(&store, p.id + 1).await, Err(AppError::NotFound(_))));
    }
}
