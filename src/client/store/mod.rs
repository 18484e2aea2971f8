pub mod auth;
pub mod toast;

pub use auth::{use_auth, PortalAuth};
pub use toast::{use_toaster, Toaster};
