//! Route access rules shared by the client guards and tests.

use crate::auth::service::AuthStatus;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Only signed-out visitors; students are sent to the dashboard.
    Public,
    /// Only signed-in students; visitors are sent to the login page.
    Protected,
    /// Everyone.
    Open,
}

/// Outcome of evaluating a guard against the current [`AuthStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; show the loading placeholder.
    Wait,
    Render,
    Redirect(PortalRoute),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortalRoute {
    Root,
    Login,
    ResetPassword,
    Dashboard,
    PersonalInfo,
    Enrollment,
    Finances,
    Services,
    NotFound,
}

impl PortalRoute {
    /// Sidebar entries, in display order.
    pub const MENU: [PortalRoute; 5] = [
        PortalRoute::Dashboard,
        PortalRoute::PersonalInfo,
        PortalRoute::Enrollment,
        PortalRoute::Finances,
        PortalRoute::Services,
    ];

    pub fn path(self) -> &'static str {
        match self {
            PortalRoute::Root => "/",
            PortalRoute::Login => "/login",
            PortalRoute::ResetPassword => "/reset-password",
            PortalRoute::Dashboard => "/dashboard",
            PortalRoute::PersonalInfo => "/personal-info",
            PortalRoute::Enrollment => "/enrollment",
            PortalRoute::Finances => "/finances",
            PortalRoute::Services => "/services",
            PortalRoute::NotFound => "/404",
        }
    }

    /// Resolves a location path, ignoring any query string and trailing slash.
    /// Unknown paths resolve to [`PortalRoute::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => PortalRoute::Root,
            "/login" => PortalRoute::Login,
            "/reset-password" => PortalRoute::ResetPassword,
            "/dashboard" => PortalRoute::Dashboard,
            "/personal-info" => PortalRoute::PersonalInfo,
            "/enrollment" => PortalRoute::Enrollment,
            "/finances" => PortalRoute::Finances,
            "/services" => PortalRoute::Services,
            _ => PortalRoute::NotFound,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PortalRoute::Root | PortalRoute::Dashboard => "Dashboard",
            PortalRoute::Login => "Iniciar Sesión",
            PortalRoute::ResetPassword => "Recuperar Contraseña",
            PortalRoute::PersonalInfo => "Información Personal",
            PortalRoute::Enrollment => "Matrícula",
            PortalRoute::Finances => "Finanzas",
            PortalRoute::Services => "Servicios",
            PortalRoute::NotFound => "Página no encontrada",
        }
    }

    pub fn access(self) -> Access {
        match self {
            PortalRoute::Login | PortalRoute::ResetPassword => Access::Public,
            PortalRoute::Root
            | PortalRoute::Dashboard
            | PortalRoute::PersonalInfo
            | PortalRoute::Enrollment
            | PortalRoute::Finances
            | PortalRoute::Services => Access::Protected,
            PortalRoute::NotFound => Access::Open,
        }
    }
}

pub fn guard(access: Access, status: AuthStatus) -> GuardDecision {
    match (access, status) {
        (Access::Open, _) => GuardDecision::Render,
        (_, AuthStatus::Loading) => GuardDecision::Wait,
        (Access::Protected, AuthStatus::Authenticated) => GuardDecision::Render,
        (Access::Protected, AuthStatus::Unauthenticated) => {
            GuardDecision::Redirect(PortalRoute::Login)
        }
        (Access::Public, AuthStatus::Authenticated) => {
            GuardDecision::Redirect(PortalRoute::Dashboard)
        }
        (Access::Public, AuthStatus::Unauthenticated) => GuardDecision::Render,
    }
}

/// Full navigation decision for a route, including the `/` entry point which always
/// forwards to the dashboard (whose own guard then applies).
pub fn navigate(route: PortalRoute, status: AuthStatus) -> GuardDecision {
    match route {
        PortalRoute::Root => GuardDecision::Redirect(PortalRoute::Dashboard),
        route => guard(route.access(), status),
    }
}
