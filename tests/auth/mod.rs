//! Tests for the session and authentication core.
//!
//! These drive the auth service and the route guard decisions through the public API, using
//! in-memory storage in place of the browser and an instant mock backend.

mod guard;
mod login;
mod logout;
mod reset_password;
mod scenario;
