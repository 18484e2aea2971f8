use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Warning,
    Info,
    Success,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warning => "Urgente",
            Self::Info => "Info",
            Self::Success => "Éxito",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Warning => "badge-error",
            Self::Info => "badge-info",
            Self::Success => "badge-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
}

/// Notifications shown in the header sheet, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    items: Vec<NotificationDto>,
}

impl NotificationFeed {
    pub fn new(mut items: Vec<NotificationDto>) -> Self {
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Self { items }
    }

    pub fn items(&self) -> &[NotificationDto] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks a single notification read, returns false for an unknown id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    /// "Tienes 1 notificación sin leer" / "Tienes 3 notificaciones sin leer"
    pub fn unread_summary(&self) -> String {
        let count = self.unread_count();
        let noun = if count == 1 {
            "notificación"
        } else {
            "notificaciones"
        };

        format!("Tienes {} {} sin leer", count, noun)
    }
}

fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    (y, m, d): (i32, u32, u32),
    read: bool,
) -> NotificationDto {
    NotificationDto {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        read,
    }
}

pub fn fixtures() -> Vec<NotificationDto> {
    use NotificationKind::*;

    vec![
        notification(
            "1",
            Warning,
            "Pago Pendiente",
            "Tienes un pago de matrícula pendiente para el semestre 2024-1",
            (2024, 1, 15),
            false,
        ),
        notification(
            "2",
            Info,
            "Nuevo Semestre",
            "La matrícula para el semestre 2024-2 estará disponible el 20 de enero",
            (2024, 1, 10),
            false,
        ),
        notification(
            "3",
            Warning,
            "Renovación de Carnet",
            "Tu carnet de biblioteca vence el 28 de febrero",
            (2024, 1, 8),
            false,
        ),
        notification(
            "4",
            Info,
            "Actualización de Datos",
            "Recuerda actualizar tu información personal para el nuevo semestre",
            (2024, 1, 5),
            true,
        ),
        notification(
            "5",
            Success,
            "Pago Confirmado",
            "Se ha confirmado el pago de laboratorios por $150.000",
            (2024, 1, 3),
            true,
        ),
    ]
}
