use portal_test_utils::prelude::*;
use student_portal::auth::{AuthStatus, KeyValueStorage};

use crate::util::{auth_over, hydrated_auth};

#[tokio::test]
/// Expect logout followed by a reload to yield no session
async fn reload_after_logout_has_no_session() {
    let (mut auth, storage) = hydrated_auth();
    auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    auth.logout().await;

    assert!(auth.session().is_none());
    assert!(storage.get(TEST_STORAGE_KEY).unwrap().is_none());

    let mut reloaded = auth_over(&storage);
    reloaded.hydrate();

    assert!(reloaded.session().is_none());
    assert_eq!(reloaded.status(), AuthStatus::Unauthenticated);
}

#[tokio::test]
/// Expect logout without a session to be harmless
async fn logout_without_session_is_noop() {
    let (mut auth, _storage) = hydrated_auth();

    auth.logout().await;

    assert!(auth.session().is_none());
    assert_eq!(auth.status(), AuthStatus::Unauthenticated);
}
