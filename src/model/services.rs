//! Certificate catalog and administrative requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: i64,
    pub delivery_time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Proceso",
            Self::Completed => "Completada",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            Self::InProgress => "badge-info",
            Self::Completed => "badge-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequestDto {
    pub id: String,
    pub kind: String,
    pub date: NaiveDate,
    pub status: RequestStatus,
    pub description: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Por favor completa todos los campos requeridos")]
    MissingFields,
}

/// Administrative procedures a student can file from the services page.
pub const ADMINISTRATIVE_SERVICES: [&str; 8] = [
    "Cambio de Programa Académico",
    "Solicitud de Homologación",
    "Retiro Temporal",
    "Reintegro",
    "Validación de Materias",
    "Cambio de Datos Personales",
    "Solicitud de Curso Dirigido",
    "Otros",
];

/// The student's request history, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestLog {
    requests: Vec<ServiceRequestDto>,
}

impl RequestLog {
    pub fn new(requests: Vec<ServiceRequestDto>) -> Self {
        Self { requests }
    }

    pub fn requests(&self) -> &[ServiceRequestDto] {
        &self.requests
    }

    /// Files an administrative request; both the service and a non-blank description are required.
    pub fn submit_administrative(
        &mut self,
        service: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<&ServiceRequestDto, RequestError> {
        let description = description.trim();
        if service.is_empty() || description.is_empty() {
            return Err(RequestError::MissingFields);
        }

        Ok(self.push(service, description, date))
    }

    /// Files a certificate request; the catalog entry name becomes the request kind.
    pub fn submit_certificate(
        &mut self,
        certificate: &CertificateDto,
        date: NaiveDate,
    ) -> &ServiceRequestDto {
        self.push(&certificate.name, &certificate.description, date)
    }

    fn push(&mut self, kind: &str, description: &str, date: NaiveDate) -> &ServiceRequestDto {
        let request = ServiceRequestDto {
            id: self.next_id(),
            kind: kind.to_string(),
            date,
            status: RequestStatus::Pending,
            description: description.to_string(),
        };

        self.requests.insert(0, request);
        &self.requests[0]
    }

    fn next_id(&self) -> String {
        let last = self
            .requests
            .iter()
            .filter_map(|r| r.id.strip_prefix("REQ-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        format!("REQ-{:03}", last + 1)
    }
}

pub fn certificates() -> Vec<CertificateDto> {
    [
        (
            "enrollment",
            "Certificado de Matrícula",
            "Certificado que acredita tu condición de estudiante activo",
            15_000,
            "1-2 días hábiles",
        ),
        (
            "grades",
            "Certificado de Notas",
            "Historial académico completo con todas las calificaciones",
            20_000,
            "2-3 días hábiles",
        ),
        (
            "conduct",
            "Certificado de Conducta",
            "Certificado de comportamiento académico y disciplinario",
            15_000,
            "1-2 días hábiles",
        ),
        (
            "degree",
            "Certificado de Grado",
            "Documento que certifica la obtención del título académico",
            50_000,
            "5-7 días hábiles",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, cost, delivery_time)| CertificateDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        delivery_time: delivery_time.to_string(),
    })
    .collect()
}

pub fn request_history() -> Vec<ServiceRequestDto> {
    [
        (
            "REQ-001",
            "Certificado de Matrícula",
            (2024, 1, 10),
            RequestStatus::Completed,
            "Certificado para trámite de beca",
        ),
        (
            "REQ-002",
            "Solicitud de Cambio de Programa",
            (2024, 1, 5),
            RequestStatus::InProgress,
            "Cambio de Ingeniería de Sistemas a Ingeniería de Software",
        ),
        (
            "REQ-003",
            "Certificado de Notas",
            (2023, 12, 20),
            RequestStatus::Completed,
            "Historial académico para proceso de intercambio",
        ),
    ]
    .into_iter()
    .map(|(id, kind, (y, m, d), status, description)| ServiceRequestDto {
        id: id.to_string(),
        kind: kind.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        status,
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    /// Expect an error when no service type is selected
    fn rejects_request_without_service() {
        let mut log = RequestLog::new(request_history());

        let result = log.submit_administrative("", "Necesito retirarme", today());

        assert_eq!(result, Err(RequestError::MissingFields));
        assert_eq!(log.requests().len(), 3);
    }

    #[test]
    /// Expect a whitespace-only description to count as missing
    fn rejects_blank_description() {
        let mut log = RequestLog::new(request_history());

        let result = log.submit_administrative("Reintegro", "   \n", today());

        assert_eq!(result, Err(RequestError::MissingFields));
    }

    #[test]
    /// Expect a valid request to be prepended as pending with the next id
    fn files_administrative_request() {
        let mut log = RequestLog::new(request_history());

        let request = log
            .submit_administrative("Reintegro", "  Reintegro 2024-2 ", today())
            .unwrap()
            .clone();

        assert_eq!(request.id, "REQ-004");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.description, "Reintegro 2024-2");
        assert_eq!(log.requests()[0], request);
    }

    #[test]
    /// Expect certificate requests to be numbered after existing ones
    fn files_certificate_request() {
        let mut log = RequestLog::default();
        let catalog = certificates();

        let first = log.submit_certificate(&catalog[0], today()).id.clone();
        let second = log.submit_certificate(&catalog[3], today()).id.clone();

        assert_eq!(first, "REQ-001");
        assert_eq!(second, "REQ-002");
        assert_eq!(log.requests()[0].kind, "Certificado de Grado");
    }
}
