use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center min-h-screen",
            "Cargando..."
        }
    )
}
