use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_hook(|| tracing::warn!("404 Error: unknown route /{}", segments.join("/")));

    rsx!(
        Title { "Página no encontrada | Portal Universitario" }
        div {
            class: "min-h-screen flex items-center justify-center bg-base-200",
            div {
                class: "text-center",
                h1 { class: "text-4xl font-bold mb-4", "404" }
                p { class: "text-xl text-base-content/60 mb-4", "¡Ups! Página no encontrada" }
                Link {
                    class: "link link-primary",
                    to: Route::Dashboard {},
                    "Volver al inicio"
                }
            }
        }
    )
}
