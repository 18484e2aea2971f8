use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaCircleExclamation, FaGear, FaGraduationCap, FaReceipt, FaUser,
};
use dioxus_free_icons::Icon;

use crate::{
    auth::PortalRoute,
    client::{router::Route, store::use_auth},
    model::{
        finance::{self, format_currency, AccountSummary, FinanceTab},
        notification::{self, NotificationFeed, NotificationKind},
    },
};

struct QuickAction {
    route: PortalRoute,
    description: &'static str,
    color: &'static str,
    important: bool,
}

impl QuickAction {
    fn button_class(&self) -> &'static str {
        if self.important {
            "btn btn-error btn-sm w-full"
        } else {
            "btn btn-primary btn-sm w-full"
        }
    }
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        route: PortalRoute::PersonalInfo,
        description: "Ver y actualizar datos personales",
        color: "bg-primary",
        important: false,
    },
    QuickAction {
        route: PortalRoute::Enrollment,
        description: "Gestionar proceso de matrícula",
        color: "bg-secondary",
        important: false,
    },
    QuickAction {
        route: PortalRoute::Finances,
        description: "Pagos, estado de cuenta, becas y documentos",
        color: "bg-error",
        important: true,
    },
    QuickAction {
        route: PortalRoute::Services,
        description: "Solicitar certificados y trámites",
        color: "bg-secondary",
        important: false,
    },
];

/// Number of notifications previewed on the dashboard.
const LATEST_NOTIFICATIONS: usize = 2;

#[component]
fn ActionIcon(route: PortalRoute) -> Element {
    match route {
        PortalRoute::PersonalInfo => rsx!(Icon { width: 24, height: 24, icon: FaUser }),
        PortalRoute::Enrollment => rsx!(Icon { width: 24, height: 24, icon: FaGraduationCap }),
        PortalRoute::Finances => rsx!(Icon { width: 24, height: 24, icon: FaReceipt }),
        _ => rsx!(Icon { width: 24, height: 24, icon: FaGear }),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(student) = auth.session() else {
        return rsx!();
    };

    let pending = finance::pending_payments();
    let summary = AccountSummary::from_records(
        &pending,
        &finance::movements(),
        &finance::scholarships(),
        &finance::bank_payments(),
    );
    let tuition = pending.first().map(|p| p.amount).unwrap_or_default();
    let feed = NotificationFeed::new(notification::fixtures());

    rsx!(
        Title { "Dashboard | Portal Universitario" }
        div {
            class: "p-6 space-y-6",
            div {
                class: "space-y-2",
                h1 { class: "text-3xl font-bold", "¡Bienvenido, {student.first_name}!" }
                p {
                    class: "text-base-content/60",
                    "Estudiante ID: {student.student_id} • {student.program}"
                }
            }

            div {
                class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                StatCard { title: "Semestre Actual", value: "2024-1", caption: "En curso",
                    Icon { width: 16, height: 16, icon: FaCalendarDays }
                }
                StatCard { title: "Estado Financiero", value: "Pendiente", value_class: "text-error",
                    caption: format_currency(tuition),
                    span { class: "text-error", Icon { width: 16, height: 16, icon: FaCircleExclamation } }
                }
                StatCard { title: "Estado Matrícula", value: "Activa", value_class: "text-secondary", caption: "2024-1",
                    Icon { width: 16, height: 16, icon: FaGraduationCap }
                }
            }

            div {
                h2 { class: "text-xl font-semibold mb-4", "Accesos Rápidos" }
                div {
                    class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                    for action in QUICK_ACTIONS.iter() {
                        div {
                            key: "{action.route.path()}",
                            class: if action.important { "card bg-base-100 shadow-lg ring-2 ring-error" } else { "card bg-base-100 shadow-sm hover:shadow-lg transition-all" },
                            div {
                                class: "card-body p-6 flex flex-row items-start gap-4",
                                div {
                                    class: "p-3 rounded-lg text-white shrink-0 {action.color}",
                                    ActionIcon { route: action.route }
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    div {
                                        class: "flex items-center gap-2 mb-1",
                                        h3 { class: "font-semibold", "{action.route.title()}" }
                                        if action.important {
                                            span { class: "badge badge-error badge-sm", "Importante" }
                                        }
                                    }
                                    p { class: "text-sm text-base-content/60 mb-3", "{action.description}" }
                                    Link {
                                        class: action.button_class(),
                                        to: Route::from(action.route),
                                        "Acceder"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "card bg-base-100 border border-secondary shadow-md",
                div {
                    class: "card-body",
                    div {
                        class: "flex items-center justify-between",
                        div {
                            class: "flex items-center gap-3",
                            div {
                                class: "p-3 rounded-lg bg-secondary text-white",
                                Icon { width: 24, height: 24, icon: FaReceipt }
                            }
                            div {
                                h2 { class: "card-title", "Becas y Beneficios Activos" }
                                p { class: "text-sm text-base-content/60", "Consulta tus becas y pagos bancarios directamente" }
                            }
                        }
                        Link {
                            class: "btn btn-outline",
                            to: Route::Finances { tab: FinanceTab::Scholarships.query().to_string() },
                            "Ver Todo"
                        }
                    }
                    div {
                        class: "grid gap-3 md:grid-cols-2 mt-4",
                        Link {
                            class: "block p-4 bg-secondary/10 rounded-lg border border-secondary/20 hover:bg-secondary/20 transition-colors",
                            to: Route::Finances { tab: FinanceTab::Scholarships.query().to_string() },
                            div {
                                class: "flex items-center justify-between mb-2",
                                span { class: "text-sm font-medium text-base-content/60", "Total en Becas" }
                                span { class: "badge badge-secondary", "Activas" }
                            }
                            p { class: "text-2xl font-bold text-secondary", "{format_currency(summary.scholarships)}" }
                            p { class: "text-xs text-base-content/60 mt-1", "2 becas activas • Semestre 2024-1" }
                        }
                        Link {
                            class: "block p-4 bg-primary/10 rounded-lg border border-primary/20 hover:bg-primary/20 transition-colors",
                            to: Route::Finances { tab: FinanceTab::Bank.query().to_string() },
                            div {
                                class: "flex items-center justify-between mb-2",
                                span { class: "text-sm font-medium text-base-content/60", "Pagos Bancarios" }
                                span { class: "badge badge-primary badge-soft", "Completados" }
                            }
                            p { class: "text-2xl font-bold text-primary", "{format_currency(summary.bank_payments)}" }
                            p { class: "text-xs text-base-content/60 mt-1", "2 pagos recibidos en cuenta" }
                        }
                    }
                }
            }

            div {
                h2 { class: "text-xl font-semibold mb-4", "Notificaciones" }
                div {
                    class: "space-y-3",
                    for item in feed.items().iter().take(LATEST_NOTIFICATIONS) {
                        div {
                            key: "{item.id}",
                            class: "card bg-base-100 shadow-sm",
                            div {
                                class: "card-body p-4 flex flex-row items-center gap-3",
                                span {
                                    class: if item.kind == NotificationKind::Warning { "p-2 rounded-lg bg-warning/20 text-warning" } else { "p-2 rounded-lg bg-info/20 text-info" },
                                    Icon { width: 20, height: 20, icon: FaCircleExclamation }
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    div {
                                        class: "flex items-center gap-2 mb-1",
                                        h3 { class: "font-semibold text-sm", "{item.title}" }
                                        span { class: "badge badge-sm {item.kind.badge_class()}", "{item.kind.label()}" }
                                    }
                                    p { class: "text-sm text-base-content/60", "{item.message}" }
                                    p { class: "text-xs text-base-content/60 mt-1", "{item.date}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn StatCard(
    title: &'static str,
    value: &'static str,
    value_class: Option<&'static str>,
    #[props(into)] caption: String,
    children: Element,
) -> Element {
    let value_class = value_class.unwrap_or_default();

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
                div { class: "text-2xl font-bold {value_class}", "{value}" }
                p { class: "text-xs text-base-content/60", "{caption}" }
            }
        }
    )
}
