use axum::{routing::patch, Router};

use crate::handlers::stock::{buy_product, sell_product};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venda/{id}/{quantidade}", patch(sell_product))
        .route("/compra/{id}/{quantidade}", patch(buy_product))
}
