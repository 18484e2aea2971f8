//! Session data models.
//!
//! Type-safe wrappers for data stored in the tower-sessions store, each under its own
//! namespaced key.

pub mod student;
