//! Service layer for business logic.
//!
//! Services combine the authentication provider with the session store so controllers only
//! translate between HTTP and domain types.

pub mod auth;
