pub mod core {
    pub mod config;
    pub mod error;
    pub mod state;
    pub mod routes;
    pub mod startup;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod metrics;
    pub mod root;
    pub mod users;
}

pub mod models {
    pub mod user;
}

pub mod stores {
    pub mod user_directory;
}

pub mod metrics {
    pub mod collector;
}

pub mod validation {
    pub mod params;
}
