use std::{sync::Arc, time::Duration};

use tower_sessions::{MemoryStore, Session};

pub struct TestSetup {
    pub session: Session,
    pub auth_latency: Duration,
}

impl Default for TestSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSetup {
    /// Creates a fresh session backed by its own in-memory store and an instant auth backend.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Self {
            session,
            auth_latency: Duration::ZERO,
        }
    }

    /// Convert the test configuration into any state that can be built from an auth latency.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<Duration>,
    {
        T::from(self.auth_latency)
    }
}
