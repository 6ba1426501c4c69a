// src/services/product.rs
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::product::{
    round_cents, NewProduct, Product, ProductChanges, NAME_MAX_LEN, PRICE_MAX,
};
use crate::store::ProductStore;

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "Product name cannot exceed {NAME_MAX_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_quantity(quantity: i32) -> Result<i32, AppError> {
    if quantity < 0 {
        return Err(AppError::validation("Quantity cannot be negative"));
    }
    Ok(quantity)
}

fn validate_price(price: f64) -> Result<f64, AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("Price must be a non-negative number"));
    }
    let price = round_cents(price);
    if !price.is_finite() || price > PRICE_MAX {
        return Err(AppError::validation(format!("Price cannot exceed {PRICE_MAX:.2}")));
    }
    Ok(price)
}

pub fn validate_new(product: NewProduct) -> Result<NewProduct, AppError> {
    Ok(NewProduct {
        name: validate_name(&product.name)?,
        quantity: validate_quantity(product.quantity)?,
        price: validate_price(product.price)?,
    })
}

pub fn validate_changes(changes: ProductChanges) -> Result<ProductChanges, AppError> {
    Ok(ProductChanges {
        name: changes.name.as_deref().map(validate_name).transpose()?,
        quantity: changes.quantity.map(validate_quantity).transpose()?,
        price: changes.price.map(validate_price).transpose()?,
    })
}

#[instrument(skip(store, product), fields(name = %product.name))]
pub async fn create(store: &dyn ProductStore, product: NewProduct) -> Result<Product, AppError> {
    let product = validate_new(product)?;
    let created = store.insert(product).await?;
    info!(id = created.id, "Product created");
    Ok(created)
}

pub async fn fetch(store: &dyn ProductStore, id: i64) -> Result<Product, AppError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
}

pub async fn fetch_all(store: &dyn ProductStore) -> Result<Vec<Product>, AppError> {
    Ok(store.list().await?)
}

#[instrument(skip(store, changes))]
pub async fn update(
    store: &dyn ProductStore,
    id: i64,
    changes: ProductChanges,
) -> Result<Product, AppError> {
    let changes = validate_changes(changes)?;
    if changes.is_empty() {
        // Nothing to write; still report a missing id.
        return fetch(store, id).await;
    }

    store
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
}

#[instrument(skip(store))]
pub async fn delete(store: &dyn ProductStore, id: i64) -> Result<(), AppError> {
    if !store.delete(id).await? {
        return Err(AppError::not_found(format!("Product {id} not found")));
    }
    info!("Product deleted");
    Ok(())
}
