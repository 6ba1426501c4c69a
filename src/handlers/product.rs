// src/handlers/product.rs
use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use crate::dtos::product::{
    CreateProductRequest, ProductEnvelope, ProductListEnvelope, UpdateProductRequest,
};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::services::product as service;
use crate::state::AppState;

// GET /produtos - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListEnvelope>, AppError> {
    let products = service::fetch_all(state.store.as_ref()).await?;
    Ok(Json(products.into()))
}

// GET /produtos/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductEnvelope>, AppError> {
    let product = service::fetch(state.store.as_ref(), id).await?;
    Ok(Json(product.into()))
}

// POST /produtos - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductEnvelope>), AppError> {
    let product = service::create(state.store.as_ref(), payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// PUT /produtos/{id} - Update product (only fields present in the body)
#[instrument(skip(state, payload))]
pub async fn update_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<ProductEnvelope>, AppError> {
    let product = service::update(state.store.as_ref(), id, payload.into()).await?;
    Ok(Json(product.into()))
}

// DELETE /produtos/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    service::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
