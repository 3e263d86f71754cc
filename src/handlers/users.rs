use crate::core::error::DirectoryError;
use crate::core::state::AppState;
use crate::models::user::{User, UserPayload};
use crate::validation::params::parse_user_id;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Resolve the raw path segment, treating an unparsable id as an unknown one
fn resolve_id(state: &AppState, raw: &str) -> Result<u32, DirectoryError> {
    parse_user_id(raw).ok_or_else(|| {
        state.metrics.increment_not_found();
        warn!(raw_id = %raw, "Unparsable user id");
        DirectoryError::NotFound(0)
    })
}

fn record_miss(state: &AppState, err: DirectoryError) -> DirectoryError {
    state.metrics.increment_not_found();
    let DirectoryError::NotFound(id) = &err;
    warn!(user_id = *id, "User not found");
    err
}

/// List every user
///
/// GET /users
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    state.metrics.increment_requests();
    Json(state.directory.list())
}

/// Fetch one user
///
/// GET /users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, DirectoryError> {
    state.metrics.increment_requests();
    let id = resolve_id(&state, &raw_id)?;

    let user = state
        .directory
        .get(id)
        .map_err(|e| record_miss(&state, e))?;

    Ok(Json(user))
}

/// Create a user; the directory assigns the id
///
/// POST /users
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Response {
    state.metrics.increment_requests();

    let user = state.directory.create(payload.name, payload.email);
    state.metrics.increment_created();

    info!(user_id = user.id, name = %user.name, "User created");

    (StatusCode::CREATED, Json(user)).into_response()
}

/// Replace name and email of a user
///
/// PUT /users/{id}
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, DirectoryError> {
    state.metrics.increment_requests();
    let id = resolve_id(&state, &raw_id)?;

    let user = state
        .directory
        .update(id, payload.name, payload.email)
        .map_err(|e| record_miss(&state, e))?;
    state.metrics.increment_updated();

    info!(user_id = user.id, "User updated");

    Ok(Json(user))
}

/// Remove a user
///
/// DELETE /users/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<&'static str, DirectoryError> {
    state.metrics.increment_requests();
    let id = resolve_id(&state, &raw_id)?;

    let removed = state
        .directory
        .delete(id)
        .map_err(|e| record_miss(&state, e))?;
    state.metrics.increment_deleted();

    info!(user_id = removed.id, "User deleted");

    Ok("User deleted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::build_state;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(build_state(Config::default()))
    }

    #[tokio::test]
    async fn test_list_returns_seed_users() {
        let state = create_test_state();

        let Json(users) = list_users_handler(State(Arc::clone(&state))).await;

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_get_existing_user() {
        let state = create_test_state();

        let Json(user) = get_user_handler(State(state), Path("2".to_string()))
            .await
            .unwrap();

        assert_eq!(user, User::new(2, "Jane Smith", "jane@example.com"));
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let state = create_test_state();

        let result = get_user_handler(State(Arc::clone(&state)), Path("abc".to_string())).await;

        assert!(matches!(result, Err(DirectoryError::NotFound(_))));
        assert_eq!(
            state.metrics.not_found.load(std::sync::atomic::Ordering::Relaxed),
            1
        );
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let state = create_test_state();
        let payload = UserPayload {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
        };

        let response = create_user_handler(State(Arc::clone(&state)), Json(payload)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.directory.get(3).unwrap().name, "Sam");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let state = create_test_state();

        let result = update_user_handler(
            State(state),
            Path("9".to_string()),
            Json(UserPayload::default()),
        )
        .await;

        assert_eq!(result.unwrap_err(), DirectoryError::NotFound(9));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let state = create_test_state();

        let first = delete_user_handler(State(Arc::clone(&state)), Path("1".to_string())).await;
        let second = delete_user_handler(State(Arc::clone(&state)), Path("1".to_string())).await;

        assert_eq!(first.unwrap(), "User deleted");
        assert_eq!(second.unwrap_err(), DirectoryError::NotFound(1));
        assert_eq!(state.directory.len(), 1);
    }
}
