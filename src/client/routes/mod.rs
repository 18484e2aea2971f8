pub mod auth;
pub mod login;
pub mod not_found;
pub mod reset_password;

pub use auth::{Dashboard, Enrollment, Finances, PersonalInfo, Services};
pub use login::Login;
pub use not_found::NotFound;
pub use reset_password::ResetPassword;
