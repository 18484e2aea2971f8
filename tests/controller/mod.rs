//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a session from a fresh in-memory store, the way axum
//! would after extracting the request.

mod login;
mod logout;
mod reset_password;
mod session;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Reads a JSON response body.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
