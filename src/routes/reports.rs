use axum::{routing::get, Router};

use crate::handlers::report::{product_quantity, stock_range, total_quantity, total_value};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/valor/total", get(total_value))
        .route("/quantidade/total", get(total_quantity))
        .route("/quantidade/total/{id}", get(product_quantity))
        .route("/estoque", get(stock_range))
}
