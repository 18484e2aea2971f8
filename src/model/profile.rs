//! Editable personal data and the password change form.

use thiserror::Error;

use crate::model::student::StudentDto;

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub emergency_contact: String,
}

impl ProfileDto {
    /// Profile prefilled from the signed-in student plus the contact details on record.
    pub fn from_student(student: &StudentDto) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            phone: "+57 300 123 4567".to_string(),
            address: "Calle 123 #45-67, Bogotá".to_string(),
            emergency_contact: "Ana González - +57 301 234 5678".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeError {
    #[error("Las contraseñas no coinciden")]
    Mismatch,
    #[error("La contraseña debe tener al menos 8 caracteres")]
    TooShort,
}

impl PasswordChangeDto {
    /// Checks the confirmation first, then the length, counting characters rather than bytes.
    pub fn validate(&self) -> Result<(), PasswordChangeError> {
        if self.new_password != self.confirm_password {
            return Err(PasswordChangeError::Mismatch);
        }

        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordChangeError::TooShort);
        }

        Ok(())
    }
}
