use tracing::info;

use crate::core::config::Config;
use crate::core::state::AppState;

/// Records present in a freshly started directory, in insertion order
pub const SEED_USERS: [(&str, &str); 2] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
];

// this runs at boot time
pub fn seed_directory(state: &AppState) {
    if !state.config.directory.seed {
        info!("Directory seeding disabled, starting empty");
        return;
    }

    for (name, email) in SEED_USERS {
        let user = state.directory.create(name.to_string(), email.to_string());
        info!(user_id = user.id, name = %user.name, "Seed user inserted");
    }

    info!(users = state.directory.len(), "Directory seeded");
}

/// State with the configured seed applied
pub fn build_state(config: Config) -> AppState {
    let state = AppState::new(config);
    seed_directory(&state);
    state
}
