//! glyco-server
//!
//! HTTP surface for the screening form: field definitions, prediction,
//! report download, and the helper calculators.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod screening;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the router with all routes and layers.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/fields", get(routes::fields::list_fields))
        .route("/guide", get(routes::fields::guide))
        .route("/predict", post(routes::predict::predict))
        .route("/report", post(routes::report::download_report))
        .route("/calculators/bmi", post(routes::calculators::calculate_bmi))
        .route(
            "/calculators/pedigree",
            post(routes::calculators::estimate_pedigree),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
