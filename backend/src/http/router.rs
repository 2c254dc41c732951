//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{colegio, cursos, distribution, salones};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static(
            distribution::RESIDUAL_HEADER,
        )]);

    let api = Router::new()
        .route(
            colegio::COLEGIOS,
            get(handlers::list_colegios).post(handlers::create_colegio),
        )
        .route(
            cursos::CURSOS,
            get(handlers::list_cursos).post(handlers::create_curso),
        )
        .route(
            salones::SALONES,
            get(handlers::list_salones).post(handlers::create_salon),
        )
        .route(distribution::DISTRIBUTE, get(handlers::distribute))
        .route(
            distribution::DISTRIBUTION_SUMMARY,
            get(handlers::distribution_summary),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(
            // CORS sits innermost: it needs the router's own response body.
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
