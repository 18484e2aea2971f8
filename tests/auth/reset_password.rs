use portal_test_utils::prelude::*;

use crate::util::hydrated_auth;

#[tokio::test]
/// Expect only the known account to accept a reset, with no effect on signed-out state
async fn accepts_only_known_account() {
    let (auth, _storage) = hydrated_auth();
    let before = auth.state();

    assert!(auth.reset_password(TEST_EMAIL).await);
    assert!(!auth.reset_password(TEST_UNKNOWN_EMAIL).await);
    assert!(!auth.reset_password("").await);

    assert_eq!(auth.state(), before);
}

#[tokio::test]
/// Expect a reset request to leave an active session untouched
async fn keeps_active_session() {
    let (mut auth, _storage) = hydrated_auth();
    auth.login(TEST_EMAIL, TEST_PASSWORD).await;
    let before = auth.state();

    auth.reset_password(TEST_UNKNOWN_EMAIL).await;
    auth.reset_password(TEST_EMAIL).await;

    assert_eq!(auth.state(), before);
}
