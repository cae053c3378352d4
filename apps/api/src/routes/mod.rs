pub mod cors;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::ideas::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/ideas",
            post(handlers::handle_generate_ideas)
                .options(handlers::handle_preflight)
                .fallback(handlers::handle_method_not_allowed),
        )
        .layer(middleware::from_fn(cors::cors_headers_middleware))
        .with_state(state)
}
