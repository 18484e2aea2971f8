//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Sign in with email and password
/// - `POST /api/auth/logout` - Clear the current session
/// - `POST /api/auth/reset-password` - Request a password reset link
/// - `GET /api/auth/session` - Get the signed-in student
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(&config)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Student Portal", description = "Student Portal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::reset_password))
        .routes(routes!(controller::auth::get_session))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
