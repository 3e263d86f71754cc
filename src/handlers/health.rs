use crate::core::state::AppState;
use crate::metrics::collector::unix_now;
use crate::stores::user_directory::IdAllocation;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Records currently held by the directory
    pub users: usize,
    pub id_allocation: IdAllocation,
    pub timestamp: i64,
}

/// Liveness plus a summary of the directory
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        users: state.directory.len(),
        id_allocation: state.directory.allocation(),
        timestamp: unix_now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::build_state;

    #[tokio::test]
    async fn test_health_reports_seeded_directory() {
        let state = Arc::new(build_state(Config::default()));

        let Json(health) = health_handler(State(state)).await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.users, 2);
        assert_eq!(health.id_allocation, IdAllocation::Length);
        assert!(health.timestamp > 0);
    }

    #[tokio::test]
    async fn test_health_tracks_directory_changes() {
        let mut config = Config::default();
        config.directory.id_allocation = IdAllocation::Monotonic;
        let state = Arc::new(build_state(config));
        state.directory.delete(1).unwrap();

        let Json(health) = health_handler(State(Arc::clone(&state))).await;

        assert_eq!(health.users, 1);
        assert_eq!(health.id_allocation, IdAllocation::Monotonic);
    }
}
