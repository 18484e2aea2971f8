//! Error types for the portal backend.
//!
//! Domain errors are defined with `thiserror` and implement `IntoResponse` so handlers can
//! return them with `?`. Anything without a dedicated mapping becomes a logged 500 response.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{auth::AuthError, model::api::ErrorDto, server::error::config::ConfigError};

/// Main error type for the portal backend.
///
/// Aggregates configuration, authentication and session store failures so the `?` operator
/// works across the controller and service layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Credential check or password reset rejected by the provider.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// The request carries no signed-in student.
    #[error("Student is not present in session")]
    StudentNotInSession,
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Invalid credentials or no student in session
/// - 404 Not Found - Password reset for an unknown account
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::StudentNotInSession => {
                tracing::debug!("{}", Self::StudentNotInSession);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not signed in".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[test]
    /// Expect 401 when no student is signed in
    fn student_not_in_session_is_unauthorized() {
        let resp = Error::StudentNotInSession.into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    /// Expect configuration problems to surface as a generic 500
    fn config_error_is_internal() {
        let err = Error::from(ConfigError::InvalidEnvValue {
            var: "PORTAL_AUTH_LATENCY_MS".to_string(),
            reason: "not a number".to_string(),
        });

        let resp = err.into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
