//! Data transfer objects shared between the client and the backend.

pub mod api;
pub mod auth;
pub mod enrollment;
pub mod finance;
pub mod notification;
pub mod profile;
pub mod services;
pub mod student;
