use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, ResetPasswordDto},
        student::StudentDto,
    },
    server::{error::Error, model::app::AppState, service::auth::SessionAuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Sign a student in with email and password
///
/// # Responses
/// - 200 (Success): The signed-in student, now bound to the session cookie
/// - 401 (Unauthorized): Email and password don't match an account
/// - 500 (Internal Server Error): The session could not be stored
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = StudentDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let service = SessionAuthService::new(&state.provider, &session);

    let student = service
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Sign the current student out by clearing their session
///
/// # Responses
/// - 204 (No Content): Signed out, or nobody was signed in
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let service = SessionAuthService::new(&state.provider, &session);

    service.logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Request a password reset link for an account
///
/// # Responses
/// - 204 (No Content): Reset link sent
/// - 404 (Not Found): No account is registered for the email
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 204, description = "Reset link sent"),
        (status = 404, description = "Unknown account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let service = SessionAuthService::new(&state.provider, &session);

    service.reset_password(&request.email).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the student signed in on the current session
///
/// # Responses
/// - 200 (Success): The signed-in student
/// - 401 (Unauthorized): Nobody is signed in on this session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in student", body = StudentDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let service = SessionAuthService::new(&state.provider, &session);

    let student = service.current().await?;

    Ok((StatusCode::OK, Json(student)))
}
