use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::student::StudentDto, server::error::Error};

/// Session key holding the signed-in student.
pub const SESSION_STUDENT_KEY: &str = "portal:student";

/// The student signed in on this session.
#[derive(Deserialize, Serialize, Debug)]
pub struct SessionStudent(pub StudentDto);

impl SessionStudent {
    /// Insert the signed-in student into session
    pub async fn insert(session: &Session, student: &StudentDto) -> Result<(), Error> {
        session
            .insert(SESSION_STUDENT_KEY, SessionStudent(student.clone()))
            .await?;

        Ok(())
    }

    /// Get the signed-in student from session
    pub async fn get(session: &Session) -> Result<Option<StudentDto>, Error> {
        let student = session
            .get::<SessionStudent>(SESSION_STUDENT_KEY)
            .await?
            .map(|SessionStudent(student)| student);

        Ok(student)
    }
}
