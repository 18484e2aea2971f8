use portal_test_utils::prelude::*;
use student_portal::auth::{guard::navigate, AuthStatus, GuardDecision, MemoryStorage, PortalRoute};

use crate::util::auth_over;

#[tokio::test]
/// Expect a cold start to load, resolve signed out, bounce to login, then render after login
async fn boot_login_and_visit_dashboard() {
    let storage = MemoryStorage::default();
    let mut auth = auth_over(&storage);
    let dashboard = PortalRoute::from_path("/dashboard");

    assert_eq!(auth.status(), AuthStatus::Loading);
    assert_eq!(navigate(dashboard, auth.status()), GuardDecision::Wait);

    auth.hydrate();

    assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    assert_eq!(
        navigate(dashboard, auth.status()),
        GuardDecision::Redirect(PortalRoute::Login)
    );
    assert_eq!(
        navigate(PortalRoute::from_path("/login"), auth.status()),
        GuardDecision::Render
    );

    assert!(auth.login(TEST_EMAIL, TEST_PASSWORD).await);

    assert!(auth.session().is_some());
    assert_eq!(navigate(dashboard, auth.status()), GuardDecision::Render);
}

#[tokio::test]
/// Expect the root path to forward to the dashboard whose guard then applies
async fn root_forwards_to_dashboard() {
    let storage = MemoryStorage::default();
    let mut auth = auth_over(&storage);
    auth.hydrate();

    assert_eq!(
        navigate(PortalRoute::from_path("/"), auth.status()),
        GuardDecision::Redirect(PortalRoute::Dashboard)
    );
    assert_eq!(
        navigate(PortalRoute::Dashboard, auth.status()),
        GuardDecision::Redirect(PortalRoute::Login)
    );
}

#[tokio::test]
/// Expect an unknown path to render the not found page whatever the session
async fn unknown_path_is_open() {
    let storage = MemoryStorage::default();
    let auth = auth_over(&storage);
    let route = PortalRoute::from_path("/no-existe");

    assert_eq!(route, PortalRoute::NotFound);
    assert_eq!(navigate(route, auth.status()), GuardDecision::Render);
}
