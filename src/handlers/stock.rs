// src/handlers/stock.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::product::ProductEnvelope;
use crate::error::AppError;
use crate::extract::AppPath;
use crate::services::stock;
use crate::state::AppState;

// PATCH /venda/{id}/{quantidade} - Sell units
#[instrument(skip(state))]
pub async fn sell_product(
    AppPath((id, quantity)): AppPath<(i64, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ProductEnvelope>, AppError> {
    let product = stock::sell(state.store.as_ref(), id, quantity, state.stock_retry_attempts).await?;
    Ok(Json(product.into()))
}

// PATCH /compra/{id}/{quantidade} - Buy units
#[instrument(skip(state))]
pub async fn buy_product(
    AppPath((id, quantity)): AppPath<(i64, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ProductEnvelope>, AppError> {
    let product = stock::buy(state.store.as_ref(), id, quantity, state.stock_retry_attempts).await?;
    Ok(Json(product.into()))
}
