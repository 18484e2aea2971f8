use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaCircleCheck, FaCircleExclamation, FaClock, FaGraduationCap,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, router::Route, store::use_toaster},
    model::enrollment::{self, EnrollmentPeriodDto, EnrollmentStatus},
};

const START_ENROLLMENT: &str = "El sistema de matrícula en línea te permitirá inscribir asignaturas según tu malla curricular y disponibilidad. Contacta con tu Director de Carrera para autorización.";
const SCHEDULES: &str = "Horarios de clases para el semestre 2024-1. Consulta con tu Escuela para más información sobre salas y horarios actualizados.";
const PREREQUISITES: &str = "Consulta los pre-requisitos de cada asignatura en tu malla curricular. Contacta con la Dirección de Docencia para más información.";
const CHANGES: &str = "Para solicitar cambios de asignatura (retiro, adición o cambio de sección), contacta con tu Director de Carrera durante el período de ajuste de matrícula.";

#[component]
pub fn Enrollment() -> Element {
    let mut toaster = use_toaster();
    let periods = enrollment::periods();
    let current = enrollment::current();
    let total_credits = current.total_credits();

    rsx!(
        Page {
            title: "Matrícula",
            description: "Administra tu proceso de matrícula y consulta el estado de tus postulaciones",
            div {
                h2 { class: "text-xl font-semibold mb-4", "Períodos de Matrícula" }
                div {
                    class: "grid gap-4 md:grid-cols-2",
                    for period in periods {
                        PeriodCard { key: "{period.period}", period: period.clone(), total_credits }
                    }
                }
            }

            div {
                class: "card bg-base-100 shadow-sm",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title flex items-center gap-2",
                        span { class: "text-secondary", Icon { width: 20, height: 20, icon: FaCircleCheck } }
                        "Estado Actual de Matrícula - {current.semester}"
                    }
                    p { class: "text-sm text-base-content/60", "Materias matriculadas para el semestre actual" }
                    div {
                        class: "flex items-center justify-between p-4 bg-secondary/10 rounded-lg",
                        div {
                            h3 { class: "font-medium", "Estado Actual De Matricula" }
                            p { class: "text-2xl font-bold text-secondary", "Activa" }
                        }
                        span { class: "badge {current.status.badge_class()}", "{current.status.label()}" }
                    }
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-md",
                            thead {
                                tr {
                                    th { "Código" }
                                    th { "Asignatura" }
                                    th { "Créditos" }
                                    th { "Estado" }
                                }
                            }
                            tbody {
                                for subject in current.subjects.iter() {
                                    tr {
                                        key: "{subject.code}",
                                        td { class: "font-mono", "{subject.code}" }
                                        td { "{subject.name}" }
                                        td { "{subject.credits}" }
                                        td { span { class: "badge badge-sm {subject.status.badge_class()}", "{subject.status.label()}" } }
                                    }
                                }
                            }
                            tfoot {
                                tr {
                                    th { colspan: 2, "Total de créditos" }
                                    th { "{total_credits}" }
                                    th {}
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "card bg-base-100 shadow-sm",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Acciones Rápidas" }
                    p { class: "text-sm text-base-content/60", "Gestiona tu matrícula y consulta información relevante" }
                    div {
                        class: "grid gap-3 md:grid-cols-2 lg:grid-cols-4",
                        button {
                            class: "btn btn-outline justify-start gap-2",
                            onclick: move |_| toaster.info("Ver Horarios", SCHEDULES),
                            Icon { width: 16, height: 16, icon: FaCalendarDays }
                            "Ver Horarios"
                        }
                        button {
                            class: "btn btn-outline justify-start gap-2",
                            onclick: move |_| toaster.info("Pre-requisitos", PREREQUISITES),
                            Icon { width: 16, height: 16, icon: FaGraduationCap }
                            "Pre-requisitos"
                        }
                        button {
                            class: "btn btn-outline justify-start gap-2",
                            onclick: move |_| toaster.info("Solicitar Cambios", CHANGES),
                            Icon { width: 16, height: 16, icon: FaCircleExclamation }
                            "Solicitar Cambios"
                        }
                        Link {
                            class: "btn btn-outline justify-start gap-2",
                            to: Route::Services {},
                            Icon { width: 16, height: 16, icon: FaCircleCheck }
                            "Certificado de Matrícula"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PeriodCard(period: EnrollmentPeriodDto, total_credits: u32) -> Element {
    let mut toaster = use_toaster();
    let title = period.period.clone();
    let end_date = period.end_date;

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body space-y-3",
                div {
                    class: "flex items-center justify-between",
                    h3 { class: "card-title text-lg", "{period.period}" }
                    span { class: "badge {period.status.badge_class()}", "{period.status.label()}" }
                }
                p { class: "text-sm text-base-content/60", "{period.description}" }
                div {
                    class: "flex items-center gap-2 text-sm text-base-content/60",
                    Icon { width: 16, height: 16, icon: FaCalendarDays }
                    "Inicio: {period.start_date}"
                }
                div {
                    class: "flex items-center gap-2 text-sm text-base-content/60",
                    Icon { width: 16, height: 16, icon: FaClock }
                    "Fin: {period.end_date}"
                }
                {match period.status {
                    EnrollmentStatus::Available => rsx!(
                        button {
                            class: "btn btn-primary w-full mt-4",
                            onclick: move |_| toaster.info("Iniciar Matrícula", START_ENROLLMENT),
                            "Iniciar Matrícula"
                        }
                    ),
                    EnrollmentStatus::Completed => rsx!(
                        button {
                            class: "btn btn-outline w-full mt-4",
                            onclick: move |_| toaster.info(
                                "Ver Detalles",
                                &format!(
                                    "Matrícula {} completada exitosamente el {}. Total de créditos: {}.",
                                    title, end_date, total_credits
                                ),
                            ),
                            "Ver Detalles"
                        }
                    ),
                    EnrollmentStatus::Enrolled => rsx!(),
                }}
            }
        }
    )
}
