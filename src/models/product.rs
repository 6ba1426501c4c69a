use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const NAME_MAX_LEN: usize = 256;

/// Largest value a `NUMERIC(10, 2)` price column holds.
pub const PRICE_MAX: f64 = 99_999_999.99;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields for a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Partial update. A `Some` field overwrites the stored value, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }
}

impl Product {
    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
    }

    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Rounds to two fractional digits, the precision of the `preco` column.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
