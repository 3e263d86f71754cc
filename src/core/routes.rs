// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{fallback, health, metrics, root, users};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root::root_handler))

        // User directory
        .route(
            "/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/users/{id}",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )

        // Operational endpoints
        .route("/health", get(health::health_handler))
        .route("/metrics", get(metrics::metrics_handler))

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
