use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaBookOpen, FaEnvelope};
use dioxus_free_icons::Icon;

use crate::{
    auth::provider::MOCK_EMAIL,
    client::{
        router::Route,
        store::{use_auth, use_toaster},
    },
};

#[component]
pub fn ResetPassword() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();

        async move {
            let email = email();

            if email.is_empty() {
                toaster.error("Error", "Por favor ingresa tu correo electrónico");
                return;
            }

            pending.set(true);
            let success = auth.reset_password(&email).await;
            pending.set(false);

            if success {
                sent.set(true);
                toaster.success(
                    "Correo enviado",
                    "Se ha enviado un enlace de recuperación a tu correo electrónico",
                );
            } else {
                toaster.error(
                    "Error",
                    "No se encontró una cuenta con ese correo electrónico",
                );
            }
        }
    };

    if sent() {
        return rsx!(
            Title { "Correo Enviado | Portal Universitario" }
            div {
                class: "min-h-screen flex items-center justify-center portal-gradient p-4",
                div {
                    class: "card w-full max-w-md shadow-lg bg-base-100",
                    div {
                        class: "card-body text-center",
                        div {
                            class: "mx-auto h-12 w-12 rounded-full bg-secondary text-secondary-content flex items-center justify-center",
                            Icon { width: 24, height: 24, icon: FaEnvelope }
                        }
                        h1 { class: "text-2xl font-bold", "Correo Enviado" }
                        p {
                            class: "text-base-content/60",
                            "Revisa tu bandeja de entrada y sigue las instrucciones para restablecer tu contraseña"
                        }
                        p {
                            class: "text-sm text-base-content/60 my-4",
                            "Si no recibes el correo en unos minutos, revisa tu carpeta de spam."
                        }
                        div {
                            class: "space-y-2",
                            button {
                                class: "btn btn-outline w-full",
                                onclick: move |_| sent.set(false),
                                "Enviar otro correo"
                            }
                            Link {
                                class: "btn btn-ghost w-full",
                                to: Route::Login {},
                                Icon { width: 16, height: 16, icon: FaArrowLeft }
                                "Volver al inicio de sesión"
                            }
                        }
                    }
                }
            }
        );
    }

    rsx!(
        Title { "Recuperar Contraseña | Portal Universitario" }
        div {
            class: "min-h-screen flex items-center justify-center portal-gradient p-4",
            div {
                class: "card w-full max-w-md shadow-lg bg-base-100",
                div {
                    class: "card-body",
                    div {
                        class: "text-center space-y-4",
                        div {
                            class: "mx-auto h-12 w-12 rounded-full bg-primary text-primary-content flex items-center justify-center",
                            Icon { width: 24, height: 24, icon: FaBookOpen }
                        }
                        h1 { class: "text-2xl font-bold", "Recuperar Contraseña" }
                        p {
                            class: "text-base-content/60",
                            "Ingresa tu correo electrónico y te enviaremos un enlace para restablecer tu contraseña"
                        }
                    }
                    form {
                        class: "space-y-4 mt-4",
                        onsubmit,
                        label {
                            class: "form-control w-full",
                            span { class: "label-text", "Correo Electrónico" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "tu.email@universidad.edu",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: pending(),
                            if pending() { "Enviando..." } else { "Enviar Enlace de Recuperación" }
                        }
                    }
                    div {
                        class: "mt-4 text-center",
                        Link {
                            class: "btn btn-ghost",
                            to: Route::Login {},
                            Icon { width: 16, height: 16, icon: FaArrowLeft }
                            "Volver al inicio de sesión"
                        }
                    }
                    div {
                        class: "mt-6 p-4 bg-base-200 rounded-lg text-sm text-center text-base-content/70",
                        strong { "Para pruebas:" }
                        br {}
                        "Usa: {MOCK_EMAIL}"
                    }
                }
            }
        }
    )
}
