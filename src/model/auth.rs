use serde::{Deserialize, Serialize};

/// Credentials submitted from the login form
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Account address submitted from the password recovery form
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResetPasswordDto {
    pub email: String,
}
