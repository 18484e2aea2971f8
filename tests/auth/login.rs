use portal_test_utils::prelude::*;
use student_portal::auth::{provider::mock_student, AuthStatus, KeyValueStorage};

use crate::util::{auth_over, hydrated_auth};

#[tokio::test]
/// Expect every pair other than the mock credentials to be rejected without a session
async fn rejects_other_credentials() {
    let (mut auth, storage) = hydrated_auth();
    let attempts = [
        (TEST_EMAIL, "password1234"),
        (TEST_EMAIL, ""),
        (TEST_UNKNOWN_EMAIL, TEST_PASSWORD),
        ("Estudiante@universidad.edu", TEST_PASSWORD),
        ("", TEST_PASSWORD),
    ];

    for (email, password) in attempts {
        let result = auth.login(email, password).await;

        assert!(!result, "{email:?}/{password:?}");
        assert!(auth.session().is_none());
        assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    }

    assert!(storage.get(TEST_STORAGE_KEY).unwrap().is_none());
}

#[tokio::test]
/// Expect the mock credentials to sign in and the session to survive a reload
async fn signs_in_and_survives_reload() {
    let (mut auth, storage) = hydrated_auth();

    let result = auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert!(result);
    assert_eq!(auth.session(), Some(mock_student()));
    assert!(!auth.state().pending);

    let mut reloaded = auth_over(&storage);
    reloaded.hydrate();

    assert_eq!(reloaded.session(), auth.session());
    assert_eq!(reloaded.status(), AuthStatus::Authenticated);
}

#[tokio::test]
/// Expect the persisted slot to hold the camelCase student record
async fn persists_student_record() -> Result<(), TestError> {
    let (mut auth, storage) = hydrated_auth();

    auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    let raw = storage.get(TEST_STORAGE_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(stored["email"], TEST_EMAIL);
    assert_eq!(stored["studentId"], "2023001234");
    assert_eq!(stored["firstName"], "María");

    Ok(())
}
