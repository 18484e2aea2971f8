use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookOpen, FaEye, FaEyeSlash};
use dioxus_free_icons::Icon;

use crate::{
    auth::provider::{MOCK_EMAIL, MOCK_PASSWORD},
    client::{
        router::Route,
        store::{use_auth, use_toaster},
    },
};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);

    let pending = auth.state().pending;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();

        async move {
            let (email, password) = (email(), password());

            if email.is_empty() || password.is_empty() {
                toaster.error("Error", "Por favor ingresa tu email y contraseña");
                return;
            }

            if !auth.login(&email, &password).await {
                toaster.error(
                    "Error de autenticación",
                    &format!(
                        "Email o contraseña incorrectos. Intenta con: {} / {}",
                        MOCK_EMAIL, MOCK_PASSWORD
                    ),
                );
            }
        }
    };

    rsx!(
        Title { "Iniciar Sesión | Portal Universitario" }
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
                        h1 { class: "text-2xl font-bold", "Portal Universitario" }
                        p {
                            class: "text-base-content/60",
                            "Ingresa a tu cuenta para acceder a los servicios estudiantiles"
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
                        label {
                            class: "form-control w-full",
                            span { class: "label-text", "Contraseña" }
                            div {
                                class: "join w-full",
                                input {
                                    class: "input input-bordered join-item w-full",
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "••••••••",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                                button {
                                    class: "btn btn-ghost join-item",
                                    r#type: "button",
                                    onclick: move |_| show_password.toggle(),
                                    if show_password() {
                                        Icon { width: 16, height: 16, icon: FaEyeSlash }
                                    } else {
                                        Icon { width: 16, height: 16, icon: FaEye }
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: pending,
                            if pending { "Iniciando sesión..." } else { "Iniciar Sesión" }
                        }
                    }
                    div {
                        class: "mt-4 text-center",
                        Link {
                            class: "link link-primary text-sm",
                            to: Route::ResetPassword {},
                            "¿Olvidaste tu contraseña?"
                        }
                    }
                    div {
                        class: "mt-6 p-4 bg-base-200 rounded-lg text-sm text-center text-base-content/70",
                        strong { "Datos de prueba:" }
                        br {}
                        "Email: {MOCK_EMAIL}"
                        br {}
                        "Contraseña: {MOCK_PASSWORD}"
                    }
                }
            }
        }
    )
}
