//! The auth service: sole owner of the in-memory session.

use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    auth::{
        error::StorageError, provider::AuthProvider, storage::KeyValueStorage, store::SessionStore,
    },
    model::student::StudentDto,
};

/// Snapshot of the authentication state published to the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// The signed-in student, if any.
    pub session: Option<StudentDto>,
    /// Whether the stored session has been read since startup.
    pub hydrated: bool,
    /// Whether a login is in flight.
    pub pending: bool,
}

/// What a route guard sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn status(&self) -> AuthStatus {
        if !self.hydrated {
            AuthStatus::Loading
        } else if self.session.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

/// Observable cell the service publishes [`AuthState`] through.
///
/// Readers only ever get snapshots; every mutation goes through [`AuthService`].
pub trait AuthCell: Clone {
    fn snapshot(&self) -> AuthState;
    fn publish(&mut self, state: AuthState);
}

impl AuthCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn publish(&mut self, state: AuthState) {
        *self.borrow_mut() = state;
    }
}

/// Login, logout and password recovery over an injected [`AuthProvider`].
///
/// Failures never escape as errors: `login` and `reset_password` report a boolean and the
/// caller shows a generic message. Storage problems are logged and otherwise ignored, so a
/// broken `localStorage` degrades to a session that does not survive a reload.
#[derive(Clone)]
pub struct AuthService<P, S, C> {
    provider: P,
    store: SessionStore<S>,
    cell: C,
}

impl<P, S, C> AuthService<P, S, C>
where
    P: AuthProvider,
    S: KeyValueStorage,
    C: AuthCell,
{
    pub fn new(provider: P, store: SessionStore<S>, cell: C) -> Self {
        Self {
            provider,
            store,
            cell,
        }
    }

    pub fn state(&self) -> AuthState {
        self.cell.snapshot()
    }

    pub fn session(&self) -> Option<StudentDto> {
        self.cell.snapshot().session
    }

    pub fn status(&self) -> AuthStatus {
        self.cell.snapshot().status()
    }

    fn update(&mut self, f: impl FnOnce(&mut AuthState)) {
        let mut state = self.cell.snapshot();
        f(&mut state);
        self.cell.publish(state);
    }

    /// Restores the session persisted by a previous visit and ends the loading state.
    ///
    /// A slot that cannot be parsed is removed so the next startup does not trip over it.
    pub fn hydrate(&mut self) {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(StorageError::Serialization(err)) => {
                tracing::warn!("Discarding unreadable stored session: {}", err);

                if let Err(err) = self.store.clear() {
                    tracing::warn!("Failed to clear unreadable stored session: {}", err);
                }

                None
            }
            Err(err) => {
                tracing::warn!("Failed to read stored session: {}", err);

                None
            }
        };

        if let Some(student) = &session {
            tracing::debug!(student_id = %student.student_id, "Restored stored session");
        }

        self.update(|state| {
            state.session = session;
            state.hydrated = true;
        });
    }

    /// Signs the student in and persists the session.
    ///
    /// `pending` is set for the whole call. A rejected login leaves the current session as it
    /// was and returns `false`.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.update(|state| state.pending = true);

        match self.provider.login(email, password).await {
            Ok(student) => {
                if let Err(err) = self.store.save(&student) {
                    tracing::warn!(
                        student_id = %student.student_id,
                        "Signed in but failed to persist session: {}",
                        err
                    );
                }

                tracing::info!(student_id = %student.student_id, "Student signed in");

                self.update(|state| {
                    state.session = Some(student);
                    state.pending = false;
                });

                true
            }
            Err(err) => {
                tracing::debug!(email = %email, "Login rejected: {}", err);

                self.update(|state| state.pending = false);

                false
            }
        }
    }

    /// Ends the session locally, then lets the provider know.
    pub async fn logout(&mut self) {
        self.update(|state| state.session = None);

        if let Err(err) = self.store.clear() {
            tracing::warn!("Failed to remove stored session: {}", err);
        }

        if let Err(err) = self.provider.logout().await {
            tracing::warn!("Provider logout failed: {}", err);
        }
    }

    /// Drops a restored session the backend no longer recognizes.
    ///
    /// Only a definite answer signs the student out; when the backend cannot be reached the
    /// session is kept. A session replaced while the check was running is left alone.
    pub async fn revalidate(&mut self) {
        let Some(student) = self.session() else {
            return;
        };

        match self.provider.verify_session(&student).await {
            Ok(true) => {}
            Ok(false) => {
                if self.session().as_ref() != Some(&student) {
                    return;
                }

                tracing::info!(student_id = %student.student_id, "Backend session expired");

                self.update(|state| state.session = None);

                if let Err(err) = self.store.clear() {
                    tracing::warn!("Failed to remove stored session: {}", err);
                }
            }
            Err(err) => {
                tracing::warn!("Could not verify the stored session: {}", err);
            }
        }
    }

    /// Asks the provider to send a recovery message; `true` when the account exists.
    pub async fn reset_password(&self, email: &str) -> bool {
        match self.provider.reset_password(email).await {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(email = %email, "Password reset rejected: {}", err);

                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::auth::{
        error::AuthError,
        provider::{mock_student, MockAuthProvider, MOCK_EMAIL, MOCK_PASSWORD},
        storage::MemoryStorage,
        store::SESSION_STORAGE_KEY,
    };

    type LocalCell = Rc<RefCell<AuthState>>;

    fn service(storage: MemoryStorage) -> AuthService<MockAuthProvider, MemoryStorage, LocalCell> {
        AuthService::new(
            MockAuthProvider::instant(),
            SessionStore::new(storage),
            LocalCell::default(),
        )
    }

    /// Records the published state as seen from inside the provider call.
    #[derive(Clone)]
    struct RecordingProvider {
        cell: LocalCell,
        seen_pending: Rc<RefCell<Option<bool>>>,
    }

    impl AuthProvider for RecordingProvider {
        async fn login(&self, _: &str, _: &str) -> Result<StudentDto, AuthError> {
            *self.seen_pending.borrow_mut() = Some(self.cell.borrow().pending);

            Err(AuthError::InvalidCredentials)
        }

        async fn logout(&self) -> Result<(), AuthError> {
            Err(AuthError::Backend("unreachable".to_string()))
        }

        async fn reset_password(&self, _: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn verify_session(&self, _: &StudentDto) -> Result<bool, AuthError> {
            Ok(true)
        }
    }

    /// Backend whose session check always gives the same answer.
    #[derive(Clone)]
    struct SessionCheckProvider {
        answer: Result<bool, AuthError>,
        checks: Rc<RefCell<u32>>,
    }

    impl SessionCheckProvider {
        fn new(answer: Result<bool, AuthError>) -> Self {
            Self {
                answer,
                checks: Rc::default(),
            }
        }
    }

    impl AuthProvider for SessionCheckProvider {
        async fn login(&self, _: &str, _: &str) -> Result<StudentDto, AuthError> {
            Ok(mock_student())
        }

        async fn logout(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn reset_password(&self, _: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn verify_session(&self, _: &StudentDto) -> Result<bool, AuthError> {
            *self.checks.borrow_mut() += 1;

            self.answer.clone()
        }
    }

    fn checked_service(
        provider: SessionCheckProvider,
        storage: MemoryStorage,
    ) -> AuthService<SessionCheckProvider, MemoryStorage, LocalCell> {
        SessionStore::new(storage.clone()).save(&mock_student()).unwrap();
        let mut auth = AuthService::new(provider, SessionStore::new(storage), LocalCell::default());
        auth.hydrate();

        auth
    }

    /// Storage whose writes always fail.
    #[derive(Clone, Default)]
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    /// Expect the service to report loading until hydration ran
    fn starts_loading() {
        let auth = service(MemoryStorage::default());

        assert_eq!(auth.status(), AuthStatus::Loading);
        assert!(auth.session().is_none());
    }

    #[test]
    /// Expect hydration of an empty store to resolve unauthenticated
    fn hydrates_empty_store_as_unauthenticated() {
        let mut auth = service(MemoryStorage::default());

        auth.hydrate();

        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    /// Expect a corrupt entry to be discarded and removed from storage
    fn discards_corrupt_stored_session() {
        let storage = MemoryStorage::default();
        storage.set(SESSION_STORAGE_KEY, "[1, 2").unwrap();
        let mut auth = service(storage.clone());

        auth.hydrate();

        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
        assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
    }

    #[tokio::test]
    /// Expect pending to be raised while the provider runs and lowered afterwards
    async fn flags_pending_during_login() {
        let cell = LocalCell::default();
        let seen_pending = Rc::new(RefCell::new(None));
        let provider = RecordingProvider {
            cell: cell.clone(),
            seen_pending: seen_pending.clone(),
        };
        let mut auth = AuthService::new(
            provider,
            SessionStore::new(MemoryStorage::default()),
            cell,
        );
        auth.hydrate();

        let success = auth.login("a", "b").await;

        assert!(!success);
        assert_eq!(*seen_pending.borrow(), Some(true));
        assert!(!auth.state().pending);
    }

    #[tokio::test]
    /// Expect a failed login to keep an existing session untouched
    async fn failed_login_keeps_existing_session() {
        let mut auth = service(MemoryStorage::default());
        auth.hydrate();
        assert!(auth.login(MOCK_EMAIL, MOCK_PASSWORD).await);

        assert!(!auth.login(MOCK_EMAIL, "wrong").await);

        assert_eq!(auth.session(), Some(mock_student()));
    }

    #[tokio::test]
    /// Expect login to succeed in memory even when the session cannot be persisted
    async fn login_survives_persistence_failure() {
        let mut auth = AuthService::new(
            MockAuthProvider::instant(),
            SessionStore::new(ReadOnlyStorage),
            LocalCell::default(),
        );
        auth.hydrate();

        assert!(auth.login(MOCK_EMAIL, MOCK_PASSWORD).await);
        assert_eq!(auth.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    /// Expect logout to clear the session even if the provider and storage fail
    async fn logout_ignores_provider_and_storage_failures() {
        let cell = LocalCell::default();
        cell.borrow_mut().session = Some(mock_student());
        cell.borrow_mut().hydrated = true;
        let provider = RecordingProvider {
            cell: cell.clone(),
            seen_pending: Rc::default(),
        };
        let mut auth = AuthService::new(provider, SessionStore::new(ReadOnlyStorage), cell);

        auth.logout().await;

        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    /// Expect password reset never to touch the published state
    async fn reset_password_leaves_state_alone() {
        let mut auth = service(MemoryStorage::default());
        auth.hydrate();
        let before = auth.state();

        assert!(auth.reset_password(MOCK_EMAIL).await);
        assert!(!auth.reset_password("x@universidad.edu").await);

        assert_eq!(auth.state(), before);
    }

    #[tokio::test]
    /// Expect a session the backend has dropped to be signed out and removed from storage
    async fn revalidate_drops_expired_session() {
        let storage = MemoryStorage::default();
        let mut auth = checked_service(SessionCheckProvider::new(Ok(false)), storage.clone());
        assert_eq!(auth.status(), AuthStatus::Authenticated);

        auth.revalidate().await;

        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
        assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
    }

    #[tokio::test]
    /// Expect an unreachable backend to leave the restored session in place
    async fn revalidate_keeps_session_when_backend_fails() {
        let storage = MemoryStorage::default();
        let provider = SessionCheckProvider::new(Err(AuthError::Backend("offline".to_string())));
        let mut auth = checked_service(provider, storage.clone());

        auth.revalidate().await;

        assert_eq!(auth.session(), Some(mock_student()));
        assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_some());
    }

    #[tokio::test]
    /// Expect no backend round trip when nobody is signed in
    async fn revalidate_skips_signed_out_visitors() {
        let provider = SessionCheckProvider::new(Ok(false));
        let checks = provider.checks.clone();
        let mut auth = AuthService::new(
            provider,
            SessionStore::new(MemoryStorage::default()),
            LocalCell::default(),
        );
        auth.hydrate();

        auth.revalidate().await;

        assert_eq!(*checks.borrow(), 0);
        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    /// Expect the mock backend to keep a restored session
    async fn mock_backend_keeps_restored_session() {
        let storage = MemoryStorage::default();
        SessionStore::new(storage.clone()).save(&mock_student()).unwrap();
        let mut auth = service(storage);
        auth.hydrate();

        auth.revalidate().await;

        assert_eq!(auth.session(), Some(mock_student()));
    }
}
