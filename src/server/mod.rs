//! Server application core modules.
//!
//! This module contains the backend of the student portal: HTTP routing with OpenAPI
//! documentation, cookie sessions holding the signed-in student, and the authentication
//! endpoints that delegate credential checks to the shared [`AuthProvider`](crate::auth::AuthProvider).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
