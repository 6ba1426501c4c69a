pub mod products;
pub mod reports;
pub mod stock;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(reports::routes())
        .merge(stock::routes())
        .route("/health", get(health_check))
}

/// The full application with middleware and state attached.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
