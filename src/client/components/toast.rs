use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::store::use_toaster;

#[component]
pub fn ToastStack() -> Element {
    let mut toaster = use_toaster();

    rsx!(
        div {
            class: "toast-stack",
            for toast in toaster.toasts() {
                div {
                    key: "{toast.id}",
                    role: "alert",
                    class: "alert {toast.kind.alert_class()} shadow-lg flex items-start gap-2",
                    div {
                        class: "flex-1",
                        p { class: "font-semibold", "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { class: "text-sm", "{toast.description}" }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| toaster.dismiss(toast.id),
                        Icon { width: 12, height: 12, icon: FaXmark }
                    }
                }
            }
        }
    )
}
