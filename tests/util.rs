use std::{cell::RefCell, rc::Rc};

use student_portal::auth::{
    AuthService, AuthState, MemoryStorage, MockAuthProvider, SessionStore,
};

pub type TestAuth = AuthService<MockAuthProvider, MemoryStorage, Rc<RefCell<AuthState>>>;

/// Builds an auth service over `storage` with an instant mock backend.
///
/// Building a second service over a clone of the same storage is how tests simulate a
/// page reload.
pub fn auth_over(storage: &MemoryStorage) -> TestAuth {
    AuthService::new(
        MockAuthProvider::instant(),
        SessionStore::new(storage.clone()),
        Rc::new(RefCell::new(AuthState::default())),
    )
}

/// A hydrated service over fresh, empty storage.
pub fn hydrated_auth() -> (TestAuth, MemoryStorage) {
    let storage = MemoryStorage::default();
    let mut auth = auth_over(&storage);
    auth.hydrate();

    (auth, storage)
}
