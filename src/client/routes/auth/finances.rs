use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowTrendUp, FaAward, FaBuildingColumns, FaCalendarDays, FaCircleCheck, FaCreditCard,
    FaDollarSign, FaDownload, FaReceipt,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, router::Route, store::use_toaster},
    model::finance::{
        self, format_currency, AccountSummary, FinanceTab, MovementKind, PaymentSelection,
    },
};

#[component]
fn TabIcon(tab: FinanceTab) -> Element {
    match tab {
        FinanceTab::Pending => rsx!(Icon { width: 16, height: 16, icon: FaCreditCard }),
        FinanceTab::History => rsx!(Icon { width: 16, height: 16, icon: FaCalendarDays }),
        FinanceTab::Scholarships => rsx!(Icon { width: 16, height: 16, icon: FaAward }),
        FinanceTab::Bank => rsx!(Icon { width: 16, height: 16, icon: FaBuildingColumns }),
        FinanceTab::Documents => rsx!(Icon { width: 16, height: 16, icon: FaDownload }),
    }
}

/// The active tab lives in the `?tab=` query so dashboard shortcuts can deep link into it.
#[component]
pub fn Finances(tab: String) -> Element {
    let navigator = navigator();
    let active = FinanceTab::from_query(&tab);

    let summary = AccountSummary::from_records(
        &finance::pending_payments(),
        &finance::movements(),
        &finance::scholarships(),
        &finance::bank_payments(),
    );

    rsx!(
        Page {
            title: "Gestión Financiera",
            description: "Consulta tus pagos pendientes, historial financiero, becas y realiza pagos en línea",
            div {
                class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                SummaryCard { title: "Cargos Pendientes", amount: summary.total_pending, amount_class: "text-error", caption: "Por pagar",
                    Icon { width: 16, height: 16, icon: FaDollarSign }
                }
                SummaryCard { title: "Total Pagado", amount: summary.total_paid, amount_class: "text-secondary", caption: "Este período académico",
                    Icon { width: 16, height: 16, icon: FaCircleCheck }
                }
                SummaryCard { title: "Becas Activas", amount: summary.scholarships, amount_class: "text-secondary", caption: "2 becas vigentes",
                    Icon { width: 16, height: 16, icon: FaAward }
                }
                SummaryCard { title: "Pagos Bancarios", amount: summary.bank_payments, amount_class: "text-secondary", caption: "Recibidos en cuenta",
                    Icon { width: 16, height: 16, icon: FaBuildingColumns }
                }
            }

            div {
                role: "tablist",
                class: "tabs tabs-box w-full grid grid-cols-5",
                for tab in FinanceTab::ALL {
                    a {
                        key: "{tab.query()}",
                        role: "tab",
                        class: if tab == active { "tab tab-active flex items-center gap-2" } else { "tab flex items-center gap-2" },
                        onclick: move |_| {
                            navigator.replace(Route::Finances { tab: tab.query().to_string() });
                        },
                        TabIcon { tab }
                        "{tab.label()}"
                    }
                }
            }

            {match active {
                FinanceTab::Pending => rsx!(PendingPayments { total_pending: summary.total_pending }),
                FinanceTab::History => rsx!(History {}),
                FinanceTab::Scholarships => rsx!(Scholarships { total: summary.scholarships }),
                FinanceTab::Bank => rsx!(BankPayments { total: summary.bank_payments }),
                FinanceTab::Documents => rsx!(Documents {}),
            }}
        }
    )
}

#[component]
fn SummaryCard(
    title: &'static str,
    amount: i64,
    amount_class: &'static str,
    caption: &'static str,
    children: Element,
) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body p-4",
                div {
                    class: "flex flex-row items-center justify-between pb-2",
                    h3 { class: "text-sm font-medium", "{title}" }
                    span { class: "text-base-content/60", {children} }
                }
                div { class: "text-2xl font-bold {amount_class}", "{format_currency(amount)}" }
                p { class: "text-xs text-base-content/60", "{caption}" }
            }
        }
    )
}

#[component]
fn SectionCard(title: &'static str, description: &'static str, icon: Element, children: Element) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 {
                    class: "card-title flex items-center gap-2",
                    span { class: "text-primary", {icon} }
                    "{title}"
                }
                p { class: "text-sm text-base-content/60 mb-2", "{description}" }
                {children}
            }
        }
    )
}

#[component]
fn PendingPayments(total_pending: i64) -> Element {
    let mut toaster = use_toaster();
    let payments = use_hook(finance::pending_payments);
    let mut selection = use_signal(PaymentSelection::default);

    let selected_total = selection.read().total(&payments);

    let mut pay = move || {
        let count = selection.read().len();

        if count == 0 {
            toaster.error("Error", "Por favor selecciona al menos un concepto de pago");
            return;
        }

        let plural = if count > 1 { "s" } else { "" };
        toaster.info(
            "Redirigiendo a pasarela de pago",
            &format!(
                "Serás redirigido al sistema de pagos en línea para {} concepto{}",
                count, plural
            ),
        );
    };

    rsx!(
        SectionCard {
            title: "Pagos Pendientes",
            description: "Selecciona los conceptos que deseas pagar y elige tu método de pago",
            icon: rsx!(Icon { width: 20, height: 20, icon: FaDollarSign }),
            div {
                class: "space-y-2",
                for payment in payments.iter().cloned() {
                    label {
                        key: "{payment.id}",
                        class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg hover:bg-base-200 cursor-pointer",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-primary shrink-0",
                            checked: selection.read().contains(&payment.id),
                            onchange: {
                                let id = payment.id.clone();
                                move |_| selection.write().toggle(&id)
                            },
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h3 { class: "font-medium text-sm", "{payment.concept}" }
                            p { class: "text-xs text-base-content/60", "Vence: {payment.due_date}" }
                        }
                        div {
                            class: "text-right shrink-0",
                            p { class: "font-bold text-sm", "{format_currency(payment.amount)}" }
                            span { class: "badge badge-sm {payment.status.badge_class()}", "{payment.status.label()}" }
                        }
                    }
                }
            }
            div {
                class: "border-t border-base-300 pt-4 space-y-4",
                div {
                    class: "flex items-center justify-between",
                    span { class: "text-lg font-semibold", "Total de conceptos:" }
                    span { class: "text-2xl font-bold text-primary", "{format_currency(total_pending)}" }
                }
                if !selection.read().is_empty() {
                    div {
                        class: "p-4 bg-primary/10 rounded-lg border border-primary/20",
                        div {
                            class: "flex items-center justify-between",
                            span { class: "font-medium", "Total seleccionado:" }
                            span { class: "text-xl font-bold text-primary", "{format_currency(selected_total)}" }
                        }
                        p { class: "text-xs text-base-content/60 mt-1", "{selection.read().summary()}" }
                    }
                }
                div {
                    class: "grid gap-4 md:grid-cols-3",
                    button {
                        class: "btn btn-primary flex items-center gap-2",
                        onclick: move |_| pay(),
                        Icon { width: 16, height: 16, icon: FaCreditCard }
                        "Tarjeta de Crédito/Débito"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| pay(),
                        "PSE"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| pay(),
                        "Transferencia Bancaria"
                    }
                }
            }
        }

        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 { class: "card-title", "Métodos de Pago Disponibles" }
                p { class: "text-sm text-base-content/60 mb-2", "Información sobre las opciones de pago aceptadas" }
                div {
                    class: "grid gap-4 md:grid-cols-3",
                    PaymentMethod { title: "Tarjetas", description: "Visa, Mastercard, American Express",
                        Icon { width: 32, height: 32, icon: FaCreditCard }
                    }
                    PaymentMethod { title: "PSE", description: "Débito desde tu cuenta bancaria",
                        Icon { width: 32, height: 32, icon: FaDollarSign }
                    }
                    PaymentMethod { title: "Transferencia", description: "Transferencia bancaria tradicional",
                        Icon { width: 32, height: 32, icon: FaCalendarDays }
                    }
                }
            }
        }
    )
}

#[component]
fn PaymentMethod(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx!(
        div {
            class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg",
            span { class: "text-primary", {children} }
            div {
                h4 { class: "font-medium", "{title}" }
                p { class: "text-sm text-base-content/60", "{description}" }
            }
        }
    )
}

#[component]
fn History() -> Element {
    let movements = finance::movements();

    rsx!(
        SectionCard {
            title: "Historial Completo de Movimientos",
            description: "Consulta todos tus cargos, pagos y movimientos financieros",
            icon: rsx!(Icon { width: 20, height: 20, icon: FaCalendarDays }),
            div {
                class: "space-y-2",
                for movement in movements {
                    div {
                        key: "{movement.id}",
                        class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg",
                        span {
                            class: "p-2 rounded-lg bg-base-200 shrink-0 {movement.amount_class()}",
                            if movement.kind == MovementKind::Payment {
                                Icon { width: 16, height: 16, icon: FaArrowTrendUp }
                            } else {
                                Icon { width: 16, height: 16, icon: FaDollarSign }
                            }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h3 { class: "font-medium text-sm", "{movement.concept}" }
                            p { class: "text-xs text-base-content/60", "{movement.date}" }
                        }
                        div {
                            class: "text-right shrink-0",
                            p {
                                class: "font-bold text-sm {movement.amount_class()}",
                                if movement.kind == MovementKind::Payment { "+" }
                                "{format_currency(movement.amount)}"
                            }
                            span { class: "badge badge-sm {movement.status.badge_class()}", "{movement.status.label()}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn Scholarships(total: i64) -> Element {
    rsx!(
        SectionCard {
            title: "Becas Activas",
            description: "Consulta las becas que tienes actualmente vigentes",
            icon: rsx!(Icon { width: 20, height: 20, icon: FaAward }),
            div {
                class: "space-y-4",
                for scholarship in finance::scholarships() {
                    div {
                        key: "{scholarship.id}",
                        class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg",
                        span { class: "p-2 rounded-lg bg-secondary/20 text-secondary shrink-0",
                            Icon { width: 16, height: 16, icon: FaAward }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h3 { class: "font-medium text-sm", "{scholarship.name}" }
                            p { class: "text-xs text-base-content/60", "{scholarship.period} • {scholarship.date}" }
                        }
                        div {
                            class: "text-right shrink-0",
                            p { class: "font-bold text-sm text-secondary", "{format_currency(scholarship.amount)}" }
                            span { class: "badge badge-sm {scholarship.status.badge_class()}", "{scholarship.status.label()}" }
                        }
                    }
                }
                div {
                    class: "pt-4 border-t border-base-300",
                    div {
                        class: "flex justify-between items-center mb-3",
                        span { class: "text-lg font-medium", "Total en Becas:" }
                        span { class: "text-2xl font-bold text-secondary", "{format_currency(total)}" }
                    }
                    p {
                        class: "text-sm text-base-content/60",
                        "Estas becas se aplican automáticamente a tu matrícula y aranceles del semestre actual."
                    }
                }
            }
        }
    )
}

#[component]
fn BankPayments(total: i64) -> Element {
    rsx!(
        SectionCard {
            title: "Pagos en Cuenta Bancaria",
            description: "Historial de pagos recibidos en tu cuenta bancaria registrada",
            icon: rsx!(Icon { width: 20, height: 20, icon: FaBuildingColumns }),
            div {
                class: "space-y-4",
                for payment in finance::bank_payments() {
                    div {
                        key: "{payment.id}",
                        class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg",
                        span { class: "p-2 rounded-lg bg-primary/10 text-primary shrink-0",
                            Icon { width: 16, height: 16, icon: FaArrowTrendUp }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h3 { class: "font-medium text-sm", "{payment.concept}" }
                            p { class: "text-xs text-base-content/60", "{payment.date} • {payment.bank_account}" }
                        }
                        div {
                            class: "text-right shrink-0",
                            p { class: "font-bold text-sm text-secondary", "+{format_currency(payment.amount)}" }
                            span { class: "badge badge-sm {payment.status.badge_class()}", "Pagado" }
                        }
                    }
                }
                div {
                    class: "pt-4 border-t border-base-300",
                    div {
                        class: "flex justify-between items-center mb-3",
                        span { class: "text-lg font-medium", "Total Pagado en Cuenta:" }
                        span { class: "text-2xl font-bold text-secondary", "{format_currency(total)}" }
                    }
                    p {
                        class: "text-sm text-base-content/60",
                        "Estos pagos corresponden a reembolsos y ayudas económicas depositadas en tu cuenta bancaria registrada."
                    }
                }
            }
        }
    )
}

#[component]
fn Documents() -> Element {
    let mut toaster = use_toaster();

    rsx!(
        SectionCard {
            title: "Documentos Disponibles",
            description: "Descarga tus comprobantes y estados de cuenta",
            icon: rsx!(Icon { width: 20, height: 20, icon: FaDownload }),
            div {
                class: "space-y-2",
                for doc in finance::documents() {
                    div {
                        key: "{doc.id}",
                        class: "flex items-center gap-3 p-3 border border-base-300 rounded-lg",
                        span { class: "p-2 rounded-lg bg-primary/10 text-primary shrink-0",
                            Icon { width: 16, height: 16, icon: FaReceipt }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h3 { class: "font-medium text-sm", "{doc.name}" }
                            p { class: "text-xs text-base-content/60", "{doc.date} • {doc.format} • {doc.size}" }
                        }
                        button {
                            class: "btn btn-outline btn-sm shrink-0",
                            onclick: {
                                let name = doc.name.clone();
                                move |_| toaster.info("Descarga iniciada", &name)
                            },
                            Icon { width: 16, height: 16, icon: FaDownload }
                            "Descargar"
                        }
                    }
                }
            }
        }
    )
}
