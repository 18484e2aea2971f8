//! The persisted session slot.

use crate::{
    auth::{error::StorageError, storage::KeyValueStorage},
    model::student::StudentDto,
};

/// Storage key holding the JSON-serialized signed-in student.
pub const SESSION_STORAGE_KEY: &str = "university_user";

/// Typed access to the single storage slot holding the session.
///
/// Only [`AuthService`](crate::auth::AuthService) writes through this type; absence of the
/// entry means nobody is signed in.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the stored session.
    ///
    /// # Returns
    /// - `Ok(Some(StudentDto))`: a session is stored
    /// - `Ok(None)`: the slot is empty
    /// - `Err(StorageError::Serialization)`: the slot holds something that is not a session
    /// - `Err(StorageError::Unavailable)`: the underlying storage cannot be accessed
    pub fn load(&self) -> Result<Option<StudentDto>, StorageError> {
        let Some(raw) = self.storage.get(SESSION_STORAGE_KEY)? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn save(&self, student: &StudentDto) -> Result<(), StorageError> {
        let raw = serde_json::to_string(student)?;

        self.storage.set(SESSION_STORAGE_KEY, &raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(SESSION_STORAGE_KEY)
    }
}
