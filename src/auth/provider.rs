//! Authentication provider seam and the built-in mock backend.

use std::time::Duration;

use dioxus_logger::tracing;

use crate::{
    auth::{delay, error::AuthError},
    model::student::StudentDto,
};

/// Email of the only account known to the mock backend.
pub const MOCK_EMAIL: &str = "estudiante@universidad.edu";
/// Password of the only account known to the mock backend.
pub const MOCK_PASSWORD: &str = "password123";
/// Round trip simulated by [`MockAuthProvider::default`].
pub const MOCK_LATENCY: Duration = Duration::from_millis(1000);

/// The student returned for a successful mock login.
pub fn mock_student() -> StudentDto {
    StudentDto {
        id: "1".to_string(),
        email: MOCK_EMAIL.to_string(),
        first_name: "María".to_string(),
        last_name: "González".to_string(),
        student_id: "2023001234".to_string(),
        program: "Ingeniería de Sistemas".to_string(),
    }
}

/// Backend operations the auth service depends on.
///
/// Implementations decide how credentials are checked; the service only learns whether an
/// operation succeeded. Futures are not required to be `Send` so browser implementations can
/// hold JS handles across awaits.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    /// Verifies credentials and returns the student they belong to.
    async fn login(&self, email: &str, password: &str) -> Result<StudentDto, AuthError>;

    /// Ends the backend side of the session, if there is one.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Requests a password-reset message for `email`.
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// Whether the backend still considers `student` signed in.
    ///
    /// `Ok(false)` means the backend session is gone; errors mean the backend could not tell.
    async fn verify_session(&self, student: &StudentDto) -> Result<bool, AuthError>;
}

/// In-process backend with a single hard-coded account.
///
/// Every call waits `latency` before answering so the UI can show its pending state; nothing
/// is ever sent anywhere.
#[derive(Clone, Debug)]
pub struct MockAuthProvider {
    latency: Duration,
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new(MOCK_LATENCY)
    }
}

impl MockAuthProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A provider that answers without delay.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl AuthProvider for MockAuthProvider {
    async fn login(&self, email: &str, password: &str) -> Result<StudentDto, AuthError> {
        delay::sleep(self.latency).await;

        if email == MOCK_EMAIL && password == MOCK_PASSWORD {
            Ok(mock_student())
        } else {
            tracing::debug!(email = %email, "Rejected mock login");

            Err(AuthError::InvalidCredentials)
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        delay::sleep(self.latency).await;

        if email == MOCK_EMAIL {
            Ok(())
        } else {
            Err(AuthError::UnknownAccount(email.to_string()))
        }
    }

    // Nothing is kept on the mock side, so a stored session never expires.
    async fn verify_session(&self, _: &StudentDto) -> Result<bool, AuthError> {
        Ok(true)
    }
}
