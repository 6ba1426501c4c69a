// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::{NewProduct, Product, ProductChanges};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "quantidade", alias = "quantity")]
    pub quantity: i32,
    #[serde(rename = "preco", alias = "price")]
    pub price: f64,
}

/// Absent fields are left untouched; a present `0` is a real value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, rename = "nome", alias = "name")]
    pub name: Option<String>,
    #[serde(default, rename = "quantidade", alias = "quantity")]
    pub quantity: Option<i32>,
    #[serde(default, rename = "preco", alias = "price")]
    pub price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco")]
    pub price: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    pub produto: ProductResponse,
}

#[derive(Debug, Serialize)]
pub struct ProductListEnvelope {
    pub produtos: Vec<ProductResponse>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Self {
            produto: product.into(),
        }
    }
}

impl From<Vec<Product>> for ProductListEnvelope {
    fn from(products: Vec<Product>) -> Self {
        Self {
            produtos: products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_accepts_portuguese_and_english_names() {
        let pt: CreateProductRequest =
            serde_json::from_value(json!({"nome": "Lapis", "quantidade": 3, "preco": 1.5})).unwrap();
        let en: CreateProductRequest =
            serde_json::from_value(json!({"name": "Lapis", "quantity": 3, "price": 1.5})).unwrap();
        assert_eq!(NewProduct::from(pt), NewProduct::from(en));
    }

    #[test]
    fn create_requires_every_field() {
        let res = serde_json::from_value::<CreateProductRequest>(json!({"nome": "Lapis"}));
        assert!(res.is_err());
    }

    #[test]
    fn update_distinguishes_absent_from_zero() {
        let req: UpdateProductRequest = serde_json::from_value(json!({"quantidade": 0})).unwrap();
        let changes = ProductChanges::from(req);
        assert_eq!(changes.quantity, Some(0));
        assert_eq!(changes.name, None);
        assert_eq!(changes.price, None);
    }

    #[test]
    fn response_uses_resource_field_names() {
        let product = Product {
            id: 4,
            name: "Lapis".into(),
            quantity: 3,
            price: 1.5,
            created_at: None,
        };
        let json = serde_json::to_value(ProductEnvelope::from(product)).unwrap();
        assert_eq!(json["produto"]["id"], 4);
        assert_eq!(json["produto"]["nome"], "Lapis");
        assert_eq!(json["produto"]["quantidade"], 3);
        assert_eq!(json["produto"]["preco"], 1.5);
    }
}
