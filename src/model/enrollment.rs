use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Available,
    Completed,
    Enrolled,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Completed => "Completado",
            Self::Enrolled => "Matriculado",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Available => "badge-accent",
            Self::Completed => "badge-ghost",
            Self::Enrolled => "badge-primary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentPeriodDto {
    pub period: String,
    pub status: EnrollmentStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectDto {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub status: EnrollmentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentEnrollmentDto {
    pub semester: String,
    pub status: EnrollmentStatus,
    pub subjects: Vec<SubjectDto>,
}

impl CurrentEnrollmentDto {
    pub fn total_credits(&self) -> u32 {
        self.subjects.iter().map(|s| s.credits).sum()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn periods() -> Vec<EnrollmentPeriodDto> {
    vec![
        EnrollmentPeriodDto {
            period: "Semestre 2024-2".to_string(),
            status: EnrollmentStatus::Available,
            start_date: date(2024, 1, 20),
            end_date: date(2024, 2, 10),
            description: "Matrícula ordinaria para estudiantes antiguos".to_string(),
        },
        EnrollmentPeriodDto {
            period: "Semestre 2024-1".to_string(),
            status: EnrollmentStatus::Completed,
            start_date: date(2023, 8, 15),
            end_date: date(2023, 9, 5),
            description: "Período completado".to_string(),
        },
    ]
}

pub fn current() -> CurrentEnrollmentDto {
    let subjects = [
        ("PROG301", "Programación Avanzada", 4),
        ("BD201", "Bases de Datos", 3),
        ("MAT205", "Cálculo III", 4),
        ("ING101", "Inglés Técnico", 2),
        ("PROJ401", "Proyecto de Grado I", 3),
        ("ETI301", "Ética Profesional", 2),
    ]
    .into_iter()
    .map(|(code, name, credits)| SubjectDto {
        code: code.to_string(),
        name: name.to_string(),
        credits,
        status: EnrollmentStatus::Enrolled,
    })
    .collect();

    CurrentEnrollmentDto {
        semester: "2024-1".to_string(),
        status: EnrollmentStatus::Enrolled,
        subjects,
    }
}

#[cfg(test)]
mod tests {
    use super::current;

    #[test]
    /// Expect the credit total to be derived from the enrolled subjects
    fn totals_enrolled_credits() {
        assert_eq!(current().total_credits(), 18);
    }
}
