use crate::core::state::AppState;
use crate::metrics::collector::MetricsSnapshot;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Counters snapshot
///
/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.get_snapshot(&state.directory))
}
