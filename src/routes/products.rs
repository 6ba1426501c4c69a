use axum::{routing::get, Router};

use crate::handlers::product::{
    create_product, delete_product, get_product, get_products, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/produtos", get(get_products).post(create_product))
        .route(
            "/produtos/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
