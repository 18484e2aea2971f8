use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaFloppyDisk, FaLock, FaPhone, FaUser};
use dioxus_free_icons::Icon;

use crate::{
    auth::delay,
    client::{
        components::Page,
        store::{use_auth, use_toaster},
    },
    model::profile::{PasswordChangeDto, ProfileDto},
};

/// Simulated round trip of a profile update.
const SAVE_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Personal,
    Contact,
    Security,
}

#[component]
pub fn PersonalInfo() -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let session = auth.session();

    let mut tab = use_signal(|| ProfileTab::Personal);
    let mut saving = use_signal(|| false);
    let mut profile = {
        let session = session.clone();
        use_signal(move || {
            session
                .as_ref()
                .map(ProfileDto::from_student)
                .unwrap_or_default()
        })
    };
    let mut passwords = use_signal(PasswordChangeDto::default);

    let save_profile = move |evt: FormEvent| async move {
        evt.prevent_default();

        saving.set(true);
        delay::sleep(SAVE_LATENCY).await;
        toaster.success(
            "Información actualizada",
            "Tus datos personales han sido actualizados correctamente",
        );
        saving.set(false);
    };

    let change_password = move |evt: FormEvent| async move {
        evt.prevent_default();

        if let Err(err) = passwords.read().validate() {
            toaster.error("Error", &err.to_string());
            return;
        }

        saving.set(true);
        delay::sleep(SAVE_LATENCY).await;
        toaster.success(
            "Contraseña actualizada",
            "Tu contraseña ha sido cambiada correctamente",
        );
        passwords.set(PasswordChangeDto::default());
        saving.set(false);
    };

    let tab_class = move |t: ProfileTab| {
        if tab() == t {
            "tab tab-active flex items-center gap-2"
        } else {
            "tab flex items-center gap-2"
        }
    };

    let Some(student) = session else {
        return rsx!();
    };

    rsx!(
        Page {
            title: "Información Personal",
            description: "Gestiona tu información personal y configuración de seguridad",
            div {
                role: "tablist",
                class: "tabs tabs-box w-full grid grid-cols-3",
                a { role: "tab", class: tab_class(ProfileTab::Personal), onclick: move |_| tab.set(ProfileTab::Personal),
                    Icon { width: 16, height: 16, icon: FaUser }
                    "Datos Personales"
                }
                a { role: "tab", class: tab_class(ProfileTab::Contact), onclick: move |_| tab.set(ProfileTab::Contact),
                    Icon { width: 16, height: 16, icon: FaEnvelope }
                    "Información de Contacto"
                }
                a { role: "tab", class: tab_class(ProfileTab::Security), onclick: move |_| tab.set(ProfileTab::Security),
                    Icon { width: 16, height: 16, icon: FaLock }
                    "Seguridad"
                }
            }

            {match tab() {
                ProfileTab::Personal => rsx!(
                    FormCard { title: "Información Básica", description: "Actualiza tu información personal básica",
                        icon: rsx!(Icon { width: 20, height: 20, icon: FaUser }),
                        form {
                            class: "space-y-4",
                            onsubmit: save_profile,
                            div {
                                class: "grid gap-4 md:grid-cols-2",
                                Field { label: "Nombres", value: profile.read().first_name.clone(),
                                    oninput: move |v| profile.write().first_name = v }
                                Field { label: "Apellidos", value: profile.read().last_name.clone(),
                                    oninput: move |v| profile.write().last_name = v }
                            }
                            Field { label: "ID Estudiante", value: student.student_id.clone(), disabled: true }
                            Field { label: "Programa Académico", value: student.program.clone(), disabled: true }
                            SubmitButton { pending: saving(), label: "Guardar Cambios", pending_label: "Guardando...",
                                Icon { width: 16, height: 16, icon: FaFloppyDisk }
                            }
                        }
                    }
                ),
                ProfileTab::Contact => rsx!(
                    FormCard { title: "Información de Contacto", description: "Mantén actualizada tu información de contacto",
                        icon: rsx!(Icon { width: 20, height: 20, icon: FaPhone }),
                        form {
                            class: "space-y-4",
                            onsubmit: save_profile,
                            Field { label: "Correo Electrónico", input_type: "email", value: profile.read().email.clone(),
                                oninput: move |v| profile.write().email = v }
                            Field { label: "Teléfono", value: profile.read().phone.clone(),
                                oninput: move |v| profile.write().phone = v }
                            Field { label: "Dirección", value: profile.read().address.clone(),
                                oninput: move |v| profile.write().address = v }
                            Field { label: "Contacto de Emergencia", value: profile.read().emergency_contact.clone(),
                                oninput: move |v| profile.write().emergency_contact = v }
                            SubmitButton { pending: saving(), label: "Actualizar Contacto", pending_label: "Guardando...",
                                Icon { width: 16, height: 16, icon: FaFloppyDisk }
                            }
                        }
                    }
                ),
                ProfileTab::Security => rsx!(
                    FormCard { title: "Cambiar Contraseña", description: "Actualiza tu contraseña para mantener tu cuenta segura",
                        icon: rsx!(Icon { width: 20, height: 20, icon: FaLock }),
                        form {
                            class: "space-y-4",
                            onsubmit: change_password,
                            Field { label: "Contraseña Actual", input_type: "password", required: true,
                                value: passwords.read().current_password.clone(),
                                oninput: move |v| passwords.write().current_password = v }
                            Field { label: "Nueva Contraseña", input_type: "password", required: true,
                                value: passwords.read().new_password.clone(),
                                oninput: move |v| passwords.write().new_password = v }
                            Field { label: "Confirmar Nueva Contraseña", input_type: "password", required: true,
                                value: passwords.read().confirm_password.clone(),
                                oninput: move |v| passwords.write().confirm_password = v }
                            div {
                                class: "text-sm text-base-content/60 space-y-1",
                                p { "• La contraseña debe tener al menos 8 caracteres" }
                                p { "• Se recomienda usar mayúsculas, minúsculas, números y símbolos" }
                            }
                            SubmitButton { pending: saving(), label: "Cambiar Contraseña", pending_label: "Actualizando...",
                                Icon { width: 16, height: 16, icon: FaLock }
                            }
                        }
                    }
                ),
            }}
        }
    )
}

#[component]
fn FormCard(title: &'static str, description: &'static str, icon: Element, children: Element) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 { class: "card-title flex items-center gap-2", {icon} "{title}" }
                p { class: "text-sm text-base-content/60 mb-2", "{description}" }
                {children}
            }
        }
    )
}

#[component]
fn Field(
    label: &'static str,
    value: String,
    input_type: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<String>>,
) -> Element {
    let input_type = input_type.unwrap_or("text");

    rsx!(
        label {
            class: "form-control w-full space-y-2",
            span { class: "label-text", "{label}" }
            input {
                class: if disabled { "input input-bordered w-full bg-base-200" } else { "input input-bordered w-full" },
                r#type: input_type,
                value,
                disabled,
                required,
                oninput: move |evt| {
                    if let Some(handler) = oninput {
                        handler.call(evt.value());
                    }
                },
            }
        }
    )
}

#[component]
fn SubmitButton(
    pending: bool,
    label: &'static str,
    pending_label: &'static str,
    children: Element,
) -> Element {
    rsx!(
        button {
            class: "btn btn-primary flex items-center gap-2",
            r#type: "submit",
            disabled: pending,
            {children}
            if pending { "{pending_label}" } else { "{label}" }
        }
    )
}
