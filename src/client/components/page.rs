use dioxus::prelude::*;

/// Content area of a portal page with its heading.
#[component]
pub fn Page(
    title: &'static str,
    #[props(into)] description: Option<String>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        Title { "{title} | Portal Universitario" }
        div {
            class: "p-6 space-y-6 {class}",
            div {
                h1 { class: "text-3xl font-bold", "{title}" }
                if let Some(description) = description {
                    p { class: "text-base-content/60", "{description}" }
                }
            }
            {children}
        }
    )
}
