use std::sync::atomic::{AtomicU64, Ordering};
use crate::stores::user_directory::UserDirectory;
use serde::Serialize;

pub struct Metrics {
    pub total_requests: AtomicU64,
    pub users_created: AtomicU64,
    pub users_updated: AtomicU64,
    pub users_deleted: AtomicU64,
    pub not_found: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub users_created: u64,
    pub users_updated: u64,
    pub users_deleted: u64,
    pub not_found: u64,
    #[serde(rename = "current_users")]
    pub user_count: usize,
    pub uptime_seconds: i64,
}

/// Seconds since the Unix epoch, 0 if the clock is before it
pub fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            users_created: AtomicU64::new(0),
            users_updated: AtomicU64::new(0),
            users_deleted: AtomicU64::new(0),
            not_found: AtomicU64::new(0),
            start_time: unix_now(),
        }
    }

    pub fn increment_requests(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.users_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.users_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.users_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads every counter plus the live directory size
    pub fn get_snapshot(&self, directory: &UserDirectory) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            users_created: self.users_created.load(Ordering::Relaxed),
            users_updated: self.users_updated.load(Ordering::Relaxed),
            users_deleted: self.users_deleted.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            user_count: directory.len(),
            uptime_seconds: (unix_now() - self.start_time).max(0),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
