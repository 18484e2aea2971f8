//! [`AuthProvider`] backed by the portal's own `/api/auth` endpoints.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::Serialize;

use crate::{
    auth::{error::AuthError, provider::AuthProvider},
    model::{
        api::ErrorDto,
        auth::{LoginDto, ResetPasswordDto},
        student::StudentDto,
    },
};

#[derive(Clone, Debug, Default)]
pub struct HttpAuthProvider;

async fn post<T: Serialize>(path: &str, body: Option<&T>) -> Result<Response, AuthError> {
    let mut request = Request::post(path).credentials(RequestCredentials::Include);

    if let Some(body) = body {
        let json =
            serde_json::to_string(body).map_err(|e| AuthError::Backend(e.to_string()))?;

        request = request
            .header("Content-Type", "application/json")
            .body(json);
    }

    request
        .send()
        .await
        .map_err(|e| AuthError::Backend(format!("Failed to send request: {}", e)))
}

async fn unexpected(response: Response) -> AuthError {
    let status = response.status();

    match response.json::<ErrorDto>().await {
        Ok(error_dto) => AuthError::Backend(format!(
            "Request failed with status {}: {}",
            status, error_dto.error
        )),
        Err(_) => AuthError::Backend(format!("Request failed with status {}", status)),
    }
}

impl AuthProvider for HttpAuthProvider {
    async fn login(&self, email: &str, password: &str) -> Result<StudentDto, AuthError> {
        let body = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = post("/api/auth/login", Some(&body)).await?;

        match response.status() {
            200 => response.json::<StudentDto>().await.map_err(|e| {
                AuthError::Backend(format!("Failed to parse student data: {}", e))
            }),
            401 => Err(AuthError::InvalidCredentials),
            _ => Err(unexpected(response).await),
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let response = post::<()>("/api/auth/logout", None).await?;

        match response.status() {
            200 | 204 => Ok(()),
            _ => Err(unexpected(response).await),
        }
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let body = ResetPasswordDto {
            email: email.to_string(),
        };
        let response = post("/api/auth/reset-password", Some(&body)).await?;

        match response.status() {
            200 | 204 => Ok(()),
            404 => Err(AuthError::UnknownAccount(email.to_string())),
            _ => Err(unexpected(response).await),
        }
    }

    async fn verify_session(&self, student: &StudentDto) -> Result<bool, AuthError> {
        let response = Request::get("/api/auth/session")
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AuthError::Backend(format!("Failed to send request: {}", e)))?;

        match response.status() {
            200 => {
                let current = response.json::<StudentDto>().await.map_err(|e| {
                    AuthError::Backend(format!("Failed to parse student data: {}", e))
                })?;

                Ok(current.id == student.id)
            }
            401 => Ok(false),
            _ => Err(unexpected(response).await),
        }
    }
}
