//! Server application models.
//!
//! This module contains the shared application state handed to every handler and the typed
//! wrappers around data kept in the cookie session.

pub mod app;
pub mod session;
