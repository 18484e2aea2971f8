use dioxus::prelude::*;

use crate::{
    auth::{guard::guard, Access, GuardDecision, PortalRoute},
    client::{components::Loading, router::Route, store::use_auth},
};

/// Renders `children` only for signed-in students, sending everyone else to the login page.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    rsx!(
        Guarded { access: Access::Protected, {children} }
    )
}

/// Renders `children` only for visitors without a session, sending students to the dashboard.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    rsx!(
        Guarded { access: Access::Public, {children} }
    )
}

#[component]
fn Guarded(access: Access, children: Element) -> Element {
    let auth = use_auth();

    match guard(access, auth.status()) {
        GuardDecision::Wait => rsx!(Loading {}),
        GuardDecision::Render => children,
        GuardDecision::Redirect(target) => rsx!(RedirectTo { target }),
    }
}

/// Replaces the current history entry with `target`.
#[component]
fn RedirectTo(target: PortalRoute) -> Element {
    let navigator = navigator();

    use_effect(move || {
        navigator.replace(Route::from(target));
    });

    rsx!(Loading {})
}

#[component]
pub fn ProtectedLayout() -> Element {
    rsx!(
        ProtectedRoute { Outlet::<Route> {} }
    )
}

#[component]
pub fn PublicLayout() -> Element {
    rsx!(
        PublicRoute { Outlet::<Route> {} }
    )
}

#[cfg(test)]
mod tests {
    use dioxus::history::History;

    use crate::{
        auth::MemoryStorage,
        client::test_util::{render_portal, signed_in_storage},
    };

    #[tokio::test]
    /// Expect a visitor without a session to be sent from a protected page to the login page
    async fn protected_route_redirects_visitors_to_login() {
        let (dom, history) = render_portal("/dashboard", MemoryStorage::default(), true).await;

        assert_eq!(history.current_route(), "/login");
        assert!(!dioxus_ssr::render(&dom).contains("Menú Principal"));
    }

    #[tokio::test]
    /// Expect a signed-in student opening the login page to land on the dashboard
    async fn public_route_redirects_students_to_dashboard() {
        let (dom, history) = render_portal("/login", signed_in_storage(), true).await;

        assert_eq!(history.current_route(), "/dashboard");
        assert!(dioxus_ssr::render(&dom).contains("Menú Principal"));
    }

    #[tokio::test]
    /// Expect a signed-in student to stay on the protected page they opened
    async fn protected_route_renders_for_students() {
        let (dom, history) = render_portal("/personal-info", signed_in_storage(), true).await;

        assert_eq!(history.current_route(), "/personal-info");
        assert!(dioxus_ssr::render(&dom).contains("Menú Principal"));
    }

    #[tokio::test]
    /// Expect no redirect while the stored session has not been read yet
    async fn guards_wait_until_hydrated() {
        let (dom, history) = render_portal("/dashboard", MemoryStorage::default(), false).await;

        assert_eq!(history.current_route(), "/dashboard");
        assert!(dioxus_ssr::render(&dom).contains("Cargando..."));
    }
}
