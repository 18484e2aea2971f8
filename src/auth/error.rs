use thiserror::Error;

/// Failures reported by an [`AuthProvider`](crate::auth::AuthProvider).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email and password do not match a known account.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// No account is registered for the email address.
    #[error("No account found for email {0:?}")]
    UnknownAccount(String),
    /// The backend could not be reached or answered unexpectedly.
    #[error("Authentication backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to (de)serialize stored session: {0}")]
    Serialization(#[from] serde_json::Error),
}
