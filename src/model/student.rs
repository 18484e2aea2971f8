use serde::{Deserialize, Serialize};

/// The signed-in student, held for the duration of a visit.
///
/// Serialized with camelCase keys; this is the exact JSON object kept in the browser's
/// session slot, so renaming a field invalidates every stored session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub program: String,
}

impl StudentDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
