use std::time::Duration;

use crate::{auth::MockAuthProvider, server::config::Config};

/// State shared by every API handler.
#[derive(Clone)]
pub struct AppState {
    /// Backend that verifies credentials and handles password resets.
    pub provider: MockAuthProvider,
}

impl AppState {
    /// Builds the state from the runtime configuration.
    pub fn new(config: &Config) -> Self {
        Self::from(config.auth_latency)
    }
}

/// Builds the state around a mock provider answering after `latency`.
impl From<Duration> for AppState {
    fn from(latency: Duration) -> Self {
        Self {
            provider: MockAuthProvider::new(latency),
        }
    }
}
