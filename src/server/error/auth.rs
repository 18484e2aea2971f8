use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{auth::AuthError, model::api::ErrorDto, server::error::InternalServerError};

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Credenciales inválidas".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UnknownAccount(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "No existe una cuenta con ese correo".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Backend(_) => InternalServerError(self).into_response(),
        }
    }
}
