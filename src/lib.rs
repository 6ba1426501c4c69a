pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use routes::build_app;
pub use state::AppState;
