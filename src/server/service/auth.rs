use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    auth::AuthProvider,
    model::student::StudentDto,
    server::{error::Error, model::session::student::SessionStudent},
};

/// Signs students in and out of a server session.
pub struct SessionAuthService<'a, P> {
    provider: &'a P,
    session: &'a Session,
}

impl<'a, P: AuthProvider> SessionAuthService<'a, P> {
    pub fn new(provider: &'a P, session: &'a Session) -> Self {
        Self { provider, session }
    }

    /// Verifies credentials and binds the student to the session.
    ///
    /// The session id is cycled before the student is stored so a cookie issued before
    /// sign-in can't be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - Credentials accepted, student stored in session
    /// - `Err(Error::AuthError)` - Credentials rejected by the provider
    /// - `Err(Error::SessionError)` - Session store failure
    pub async fn login(&self, email: &str, password: &str) -> Result<StudentDto, Error> {
        let student = self.provider.login(email, password).await?;

        self.session.cycle_id().await?;
        SessionStudent::insert(self.session, &student).await?;

        tracing::info!(student_id = %student.student_id, "Student signed in");

        Ok(student)
    }

    /// Clears the session if a student is signed in on it.
    ///
    /// Returns whether a student was signed out. Provider failures are logged and don't
    /// keep the session alive.
    pub async fn logout(&self) -> Result<bool, Error> {
        // Clearing a session that was never stored fails, so only clear when someone signed in
        let Some(student) = SessionStudent::get(self.session).await? else {
            return Ok(false);
        };

        if let Err(e) = self.provider.logout().await {
            tracing::warn!(student_id = %student.student_id, "Provider logout failed: {}", e);
        }

        self.session.clear().await;

        Ok(true)
    }

    /// Requests a password reset for `email`.
    pub async fn reset_password(&self, email: &str) -> Result<(), Error> {
        self.provider.reset_password(email).await?;

        tracing::info!(email = %email, "Password reset requested");

        Ok(())
    }

    /// Returns the student signed in on the session.
    pub async fn current(&self) -> Result<StudentDto, Error> {
        SessionStudent::get(self.session)
            .await?
            .ok_or(Error::StudentNotInSession)
    }
}
