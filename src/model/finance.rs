//! Account statement records and the pending-payment selection.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Completed,
    Active,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Paid => "Pagado",
            Self::Completed => "Completado",
            Self::Active => "Activa",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            _ => "badge-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: String,
    pub concept: String,
    pub amount: i64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Charge,
    Payment,
}

/// A line in the account statement; charges carry negative amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementDto {
    pub id: String,
    pub date: NaiveDate,
    pub concept: String,
    pub kind: MovementKind,
    pub amount: i64,
    pub status: PaymentStatus,
}

impl MovementDto {
    pub fn amount_class(&self) -> &'static str {
        if self.status == PaymentStatus::Pending {
            return "text-warning";
        }

        match self.kind {
            MovementKind::Payment => "text-success",
            MovementKind::Charge => "text-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipDto {
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub period: String,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankPaymentDto {
    pub id: String,
    pub concept: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub bank_account: String,
    pub status: PaymentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSummary {
    pub total_pending: i64,
    pub total_paid: i64,
    pub scholarships: i64,
    pub bank_payments: i64,
}

impl AccountSummary {
    pub fn from_records(
        pending: &[PaymentDto],
        movements: &[MovementDto],
        scholarships: &[ScholarshipDto],
        bank_payments: &[BankPaymentDto],
    ) -> Self {
        Self {
            total_pending: pending.iter().map(|p| p.amount).sum(),
            total_paid: movements
                .iter()
                .filter(|m| m.kind == MovementKind::Payment && m.status == PaymentStatus::Completed)
                .map(|m| m.amount)
                .sum(),
            scholarships: scholarships
                .iter()
                .filter(|s| s.status == PaymentStatus::Active)
                .map(|s| s.amount)
                .sum(),
            bank_payments: bank_payments.iter().map(|b| b.amount).sum(),
        }
    }
}

/// A downloadable statement or receipt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub format: String,
    pub size: String,
}

/// Sections of the finances page, addressable through `?tab=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinanceTab {
    #[default]
    Pending,
    History,
    Scholarships,
    Bank,
    Documents,
}

impl FinanceTab {
    pub const ALL: [FinanceTab; 5] = [
        FinanceTab::Pending,
        FinanceTab::History,
        FinanceTab::Scholarships,
        FinanceTab::Bank,
        FinanceTab::Documents,
    ];

    /// Unknown or empty values open the pending payments.
    pub fn from_query(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.query() == value)
            .unwrap_or_default()
    }

    pub fn query(self) -> &'static str {
        match self {
            FinanceTab::Pending => "pending",
            FinanceTab::History => "history",
            FinanceTab::Scholarships => "scholarships",
            FinanceTab::Bank => "bank",
            FinanceTab::Documents => "documents",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FinanceTab::Pending => "Pagar",
            FinanceTab::History => "Historial",
            FinanceTab::Scholarships => "Becas",
            FinanceTab::Bank => "Pagos Bancarios",
            FinanceTab::Documents => "Documentos",
        }
    }
}

/// Pending payments ticked for online payment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentSelection {
    selected: BTreeSet<String>,
}

impl PaymentSelection {
    pub fn toggle(&mut self, payment_id: &str) {
        if !self.selected.remove(payment_id) {
            self.selected.insert(payment_id.to_string());
        }
    }

    pub fn contains(&self, payment_id: &str) -> bool {
        self.selected.contains(payment_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sum of the selected payments that still appear in `payments`.
    pub fn total(&self, payments: &[PaymentDto]) -> i64 {
        payments
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .map(|p| p.amount)
            .sum()
    }

    /// "1 concepto seleccionado" / "2 conceptos seleccionados"
    pub fn summary(&self) -> String {
        let plural = if self.len() > 1 { "s" } else { "" };

        format!("{} concepto{} seleccionado{}", self.len(), plural, plural)
    }
}

/// Formats an amount as Chilean pesos without decimals, e.g. `$1.200.000`.
///
/// The sign is dropped; callers show direction through colour or a prefix.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn pending_payments() -> Vec<PaymentDto> {
    [
        ("MAT-2024-1", "Matrícula Semestre 2024-1", 1_200_000, date(2024, 2, 15)),
        ("LAB-2024-1", "Laboratorios", 150_000, date(2024, 2, 20)),
        ("BIB-2024-1", "Biblioteca - Carnet Anual", 85_000, date(2024, 2, 25)),
        ("SEG-2024", "Seguro Estudiantil", 120_000, date(2024, 2, 28)),
        ("DEP-2024-1", "Deportes y Recreación", 95_000, date(2024, 3, 1)),
        ("MAT-DID-2024-1", "Material Didáctico", 180_000, date(2024, 3, 5)),
    ]
    .into_iter()
    .map(|(id, concept, amount, due_date)| PaymentDto {
        id: id.to_string(),
        concept: concept.to_string(),
        amount,
        due_date,
        status: PaymentStatus::Pending,
    })
    .collect()
}

pub fn movements() -> Vec<MovementDto> {
    use MovementKind::*;
    use PaymentStatus::*;

    [
        ("TXN-001", date(2024, 2, 15), "Matrícula Semestre 2024-1", Charge, -1_200_000, Pending),
        ("TXN-002", date(2024, 2, 20), "Laboratorios", Charge, -150_000, Pending),
        ("TXN-003", date(2024, 1, 5), "Beca Excelencia Académica USM", Payment, 600_000, Completed),
        ("TXN-004", date(2024, 1, 5), "Beca de Apoyo Socioeconómico", Payment, 350_000, Completed),
        ("TXN-005", date(2023, 12, 20), "Pago Ayudantía Cálculo I", Payment, 120_000, Completed),
        ("TXN-006", date(2023, 12, 15), "Pago Matrícula 2023-2", Payment, 1_400_000, Completed),
        ("TXN-007", date(2023, 12, 1), "Título Profesional", Payment, 250_000, Completed),
        ("TXN-008", date(2023, 8, 15), "Matrícula Semestre 2023-2", Charge, -1_150_000, Completed),
    ]
    .into_iter()
    .map(|(id, date, concept, kind, amount, status)| MovementDto {
        id: id.to_string(),
        date,
        concept: concept.to_string(),
        kind,
        amount,
        status,
    })
    .collect()
}

pub fn scholarships() -> Vec<ScholarshipDto> {
    [
        ("SCH-001", "Beca Excelencia Académica USM", 600_000),
        ("SCH-002", "Beca de Apoyo Socioeconómico", 350_000),
    ]
    .into_iter()
    .map(|(id, name, amount)| ScholarshipDto {
        id: id.to_string(),
        name: name.to_string(),
        amount,
        period: "2024-1".to_string(),
        date: date(2024, 1, 5),
        status: PaymentStatus::Active,
    })
    .collect()
}

pub fn bank_payments() -> Vec<BankPaymentDto> {
    [
        ("BP-001", "Reembolso Arancel", 950_000, date(2024, 1, 20)),
        ("BP-002", "Ayuda Práctica Industrial", 900_000, date(2024, 1, 15)),
    ]
    .into_iter()
    .map(|(id, concept, amount, date)| BankPaymentDto {
        id: id.to_string(),
        concept: concept.to_string(),
        amount,
        date,
        bank_account: "**** **** **** 1234".to_string(),
        status: PaymentStatus::Completed,
    })
    .collect()
}

pub fn documents() -> Vec<DocumentDto> {
    [
        ("DOC-001", "Estado de Cuenta Enero 2024", date(2024, 1, 31), "245 KB"),
        (
            "DOC-002",
            "Comprobante de Pago - Título Profesional",
            date(2023, 12, 1),
            "180 KB",
        ),
        ("DOC-003", "Estado de Cuenta Diciembre 2023", date(2023, 12, 31), "230 KB"),
    ]
    .into_iter()
    .map(|(id, name, date, size)| DocumentDto {
        id: id.to_string(),
        name: name.to_string(),
        date,
        format: "PDF".to_string(),
        size: size.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect thousands to be grouped with dots
    fn formats_currency_with_dot_grouping() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(85_000), "$85.000");
        assert_eq!(format_currency(1_200_000), "$1.200.000");
    }

    #[test]
    /// Expect charges to be shown without their sign
    fn formats_negative_amounts_as_absolute() {
        assert_eq!(format_currency(-1_150_000), "$1.150.000");
    }

    #[test]
    /// Expect toggling twice to deselect a payment
    fn toggles_selection() {
        let mut selection = PaymentSelection::default();

        selection.toggle("LAB-2024-1");
        assert!(selection.contains("LAB-2024-1"));

        selection.toggle("LAB-2024-1");
        assert!(selection.is_empty());
    }

    #[test]
    /// Expect the total to only include the selected payments
    fn totals_selected_payments() {
        let payments = pending_payments();
        let mut selection = PaymentSelection::default();
        selection.toggle("MAT-2024-1");
        selection.toggle("LAB-2024-1");

        assert_eq!(selection.total(&payments), 1_350_000);
        assert_eq!(selection.summary(), "2 conceptos seleccionados");
    }

    #[test]
    /// Expect singular wording for a single selected payment
    fn summarizes_single_selection() {
        let mut selection = PaymentSelection::default();
        selection.toggle("SEG-2024");

        assert_eq!(selection.summary(), "1 concepto seleccionado");
    }

    #[test]
    /// Expect ids missing from the payment list to be ignored in the total
    fn ignores_unknown_ids_in_total() {
        let mut selection = PaymentSelection::default();
        selection.toggle("NOT-A-PAYMENT");

        assert_eq!(selection.total(&pending_payments()), 0);
    }

    #[test]
    /// Expect the summary to be derived from the statement records
    fn summarizes_account() {
        let summary = AccountSummary::from_records(
            &pending_payments(),
            &movements(),
            &scholarships(),
            &bank_payments(),
        );

        assert_eq!(summary.total_pending, 1_830_000);
        assert_eq!(summary.total_paid, 2_720_000);
        assert_eq!(summary.scholarships, 950_000);
        assert_eq!(summary.bank_payments, 1_850_000);
    }

    #[test]
    /// Expect pending movements to be highlighted as warnings regardless of kind
    fn colours_movements_by_status_then_kind() {
        let movements = movements();

        assert_eq!(movements[0].amount_class(), "text-warning");
        assert_eq!(movements[2].amount_class(), "text-success");
        assert_eq!(movements[7].amount_class(), "text-error");
    }

    #[test]
    /// Expect deep links to select their tab and anything else to open pending payments
    fn resolves_tab_from_query() {
        assert_eq!(FinanceTab::from_query("scholarships"), FinanceTab::Scholarships);
        assert_eq!(FinanceTab::from_query("bank"), FinanceTab::Bank);
        assert_eq!(FinanceTab::from_query(""), FinanceTab::Pending);
        assert_eq!(FinanceTab::from_query("becas"), FinanceTab::Pending);
    }
}
