// src/handlers/report.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::AppError;
use crate::extract::AppPath;
use crate::services::report::{self, StockRange};
use crate::state::AppState;

// GET /valor/total - Sum of quantity * price over every product
#[instrument(skip(state))]
pub async fn total_value(State(state): State<AppState>) -> Result<Json<f64>, AppError> {
    Ok(Json(report::inventory_value(state.store.as_ref()).await?))
}

// GET /quantidade/total - Sum of quantities
#[instrument(skip(state))]
pub async fn total_quantity(State(state): State<AppState>) -> Result<Json<i64>, AppError> {
    Ok(Json(report::inventory_quantity(state.store.as_ref()).await?))
}

// GET /quantidade/total/{id} - Quantity of a single product
#[instrument(skip(state))]
pub async fn product_quantity(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<i32>, AppError> {
    Ok(Json(report::quantity_of(state.store.as_ref(), id).await?))
}

// GET /estoque - Smallest and largest stock level
#[instrument(skip(state))]
pub async fn stock_range(State(state): State<AppState>) -> Result<Json<StockRange>, AppError> {
    Ok(Json(report::inventory_range(state.store.as_ref()).await?))
}
