//! HTTP controller endpoints for the portal API.
//!
//! Axum handlers translating requests into service calls and service results into JSON
//! responses. Each handler is annotated for the generated OpenAPI document.

pub mod auth;
