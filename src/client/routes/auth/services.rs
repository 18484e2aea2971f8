use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaCircleCheck, FaClock, FaFileLines, FaPaperPlane,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{components::Page, store::use_toaster},
    model::{
        finance::format_currency,
        services::{self, CertificateDto, RequestLog, RequestStatus, ADMINISTRATIVE_SERVICES},
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ServicesTab {
    Certificates,
    Requests,
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn Services() -> Element {
    let mut tab = use_signal(|| ServicesTab::Certificates);
    let log = use_signal(|| RequestLog::new(services::request_history()));

    let tab_class = move |t: ServicesTab| {
        if tab() == t {
            "tab tab-active flex items-center gap-2"
        } else {
            "tab flex items-center gap-2"
        }
    };

    rsx!(
        Page {
            title: "Servicios",
            description: "Solicita certificados y realiza trámites administrativos",
            div {
                role: "tablist",
                class: "tabs tabs-box w-full grid grid-cols-2",
                a { role: "tab", class: tab_class(ServicesTab::Certificates), onclick: move |_| tab.set(ServicesTab::Certificates),
                    Icon { width: 16, height: 16, icon: FaAward }
                    "Certificados"
                }
                a { role: "tab", class: tab_class(ServicesTab::Requests), onclick: move |_| tab.set(ServicesTab::Requests),
                    Icon { width: 16, height: 16, icon: FaFileLines }
                    "Mis Solicitudes"
                }
            }

            if tab() == ServicesTab::Certificates {
                Certificates { log }
                AdministrativeRequest { log }
            } else {
                RequestHistory { log }
            }

            div {
                class: "card bg-base-100 shadow-sm",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Información Importante" }
                    p { class: "text-sm text-base-content/60", "Ten en cuenta estos aspectos sobre los servicios" }
                    div {
                        class: "grid gap-4 md:grid-cols-2",
                        div {
                            class: "space-y-2",
                            h4 { class: "font-medium", "Tiempos de Entrega" }
                            ul {
                                class: "text-sm text-base-content/60 space-y-1",
                                li { "• Los certificados se procesan en días hábiles" }
                                li { "• Las solicitudes administrativas pueden tardar hasta 15 días" }
                                li { "• Recibirás notificaciones por correo electrónico" }
                            }
                        }
                        div {
                            class: "space-y-2",
                            h4 { class: "font-medium", "Métodos de Entrega" }
                            ul {
                                class: "text-sm text-base-content/60 space-y-1",
                                li { "• Descarga digital desde el portal" }
                                li { "• Envío por correo certificado (costo adicional)" }
                                li { "• Recogida en oficinas de Registro Académico" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn Certificates(log: Signal<RequestLog>) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 {
                    class: "card-title flex items-center gap-2",
                    span { class: "text-primary", Icon { width: 20, height: 20, icon: FaAward } }
                    "Certificados Disponibles"
                }
                p { class: "text-sm text-base-content/60 mb-2", "Solicita los certificados que necesites de manera rápida y segura" }
                div {
                    class: "grid gap-4 md:grid-cols-2",
                    for certificate in services::certificates() {
                        CertificateCard { key: "{certificate.id}", certificate: certificate.clone(), log }
                    }
                }
            }
        }
    )
}

#[component]
fn CertificateCard(certificate: CertificateDto, mut log: Signal<RequestLog>) -> Element {
    let mut toaster = use_toaster();
    let requested = certificate.clone();

    rsx!(
        div {
            class: "card card-border border-2 hover:border-primary/50 transition-colors",
            div {
                class: "card-body space-y-2",
                h3 { class: "card-title text-lg", "{certificate.name}" }
                p { class: "text-sm text-base-content/60", "{certificate.description}" }
                div {
                    class: "flex items-center justify-between",
                    span { class: "text-sm font-medium", "Costo:" }
                    span { class: "text-lg font-bold text-primary", "{format_currency(certificate.cost)}" }
                }
                div {
                    class: "flex items-center justify-between",
                    span { class: "text-sm font-medium", "Entrega:" }
                    span { class: "text-sm text-base-content/60", "{certificate.delivery_time}" }
                }
                button {
                    class: "btn btn-primary w-full",
                    onclick: move |_| {
                        let id = log.write().submit_certificate(&requested, today()).id.clone();
                        tracing::debug!(request_id = %id, certificate = %requested.id, "Certificate requested");

                        toaster.success(
                            "Solicitud enviada",
                            "Tu solicitud de certificado ha sido procesada. Recibirás una notificación cuando esté listo.",
                        );
                    },
                    "Solicitar Certificado"
                }
            }
        }
    )
}

#[component]
fn AdministrativeRequest(mut log: Signal<RequestLog>) -> Element {
    let mut toaster = use_toaster();
    let mut service = use_signal(String::new);
    let mut description = use_signal(String::new);

    let incomplete = service.read().is_empty() || description.read().trim().is_empty();

    let submit = move |_: MouseEvent| {
        let result = log
            .write()
            .submit_administrative(&service.read(), &description.read(), today())
            .map(|request| request.id.clone());

        match result {
            Ok(id) => {
                tracing::debug!(request_id = %id, "Administrative request filed");

                toaster.success(
                    "Solicitud enviada",
                    "Tu solicitud administrativa ha sido enviada. Te contactaremos pronto.",
                );
                service.set(String::new());
                description.set(String::new());
            }
            Err(err) => toaster.error("Error", &err.to_string()),
        }
    };

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body space-y-4",
                h2 {
                    class: "card-title flex items-center gap-2",
                    span { class: "text-primary", Icon { width: 20, height: 20, icon: FaFileLines } }
                    "Solicitudes Administrativas"
                }
                p { class: "text-sm text-base-content/60", "Realiza trámites y solicitudes administrativas" }
                label {
                    class: "form-control w-full space-y-2",
                    span { class: "label-text", "Tipo de Solicitud" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{service}",
                        onchange: move |evt| service.set(evt.value()),
                        option { value: "", disabled: true, selected: service.read().is_empty(), "Selecciona el tipo de solicitud" }
                        for kind in ADMINISTRATIVE_SERVICES {
                            option { key: "{kind}", value: kind, "{kind}" }
                        }
                    }
                }
                label {
                    class: "form-control w-full space-y-2",
                    span { class: "label-text", "Descripción de la Solicitud" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Describe detalladamente tu solicitud...",
                        rows: 4,
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary w-fit flex items-center gap-2",
                    disabled: incomplete,
                    onclick: submit,
                    Icon { width: 16, height: 16, icon: FaPaperPlane }
                    "Enviar Solicitud"
                }
            }
        }
    )
}

#[component]
fn RequestHistory(log: Signal<RequestLog>) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 {
                    class: "card-title flex items-center gap-2",
                    span { class: "text-primary", Icon { width: 20, height: 20, icon: FaFileLines } }
                    "Historial de Solicitudes"
                }
                p { class: "text-sm text-base-content/60 mb-2", "Consulta el estado de tus solicitudes anteriores" }
                div {
                    class: "space-y-4",
                    for request in log.read().requests().iter().cloned() {
                        div {
                            key: "{request.id}",
                            class: "flex items-center justify-between p-4 border border-base-300 rounded-lg",
                            div {
                                class: "flex items-start gap-3",
                                span {
                                    class: "p-2 rounded-full bg-primary/10 text-primary",
                                    if request.status == RequestStatus::Completed {
                                        Icon { width: 16, height: 16, icon: FaCircleCheck }
                                    } else {
                                        Icon { width: 16, height: 16, icon: FaClock }
                                    }
                                }
                                div {
                                    h3 { class: "font-medium", "{request.kind}" }
                                    p { class: "text-sm text-base-content/60", "{request.description}" }
                                    p { class: "text-xs text-base-content/60 mt-1", "Solicitado: {request.date}" }
                                }
                            }
                            div {
                                class: "text-right",
                                p { class: "text-sm font-medium mb-1", "ID: {request.id}" }
                                span { class: "badge {request.status.badge_class()}", "{request.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
