use portal_test_utils::prelude::*;
use student_portal::auth::{
    guard::{guard, navigate},
    Access, GuardDecision, PortalRoute,
};

use crate::util::hydrated_auth;

#[tokio::test]
/// Expect protected content to redirect to login without a session and render with one
async fn protected_route_follows_session() {
    let (mut auth, _storage) = hydrated_auth();

    assert_eq!(
        guard(Access::Protected, auth.status()),
        GuardDecision::Redirect(PortalRoute::Login)
    );

    auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(guard(Access::Protected, auth.status()), GuardDecision::Render);
}

#[tokio::test]
/// Expect public content to render without a session and redirect to the dashboard with one
async fn public_route_follows_session() {
    let (mut auth, _storage) = hydrated_auth();

    assert_eq!(guard(Access::Public, auth.status()), GuardDecision::Render);

    auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(
        guard(Access::Public, auth.status()),
        GuardDecision::Redirect(PortalRoute::Dashboard)
    );
}

#[tokio::test]
/// Expect every menu destination to require a session
async fn menu_routes_are_protected() {
    let (auth, _storage) = hydrated_auth();

    for route in PortalRoute::MENU {
        let path = route.path();

        assert_eq!(
            navigate(PortalRoute::from_path(path), auth.status()),
            GuardDecision::Redirect(PortalRoute::Login),
            "{path}"
        );
    }
}
