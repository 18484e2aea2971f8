//! Shared values used across tests.
//!
//! These mirror the account known to the mock authentication backend and the browser
//! storage key of the session slot, so tests fail loudly if either changes.

/// Email of the account accepted by the mock backend.
pub static TEST_EMAIL: &str = "estudiante@universidad.edu";

/// Password of the account accepted by the mock backend.
pub static TEST_PASSWORD: &str = "password123";

/// An address no account is registered for.
pub static TEST_UNKNOWN_EMAIL: &str = "nadie@universidad.edu";

/// Storage key of the persisted session.
pub static TEST_STORAGE_KEY: &str = "university_user";
