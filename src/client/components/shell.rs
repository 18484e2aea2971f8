use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaCircleQuestion};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{NotificationButton, Sidebar},
    router::Route,
    store::{use_auth, use_toaster},
};

/// Router layout wrapping the routed page in [`PortalShell`].
#[component]
pub fn Shell() -> Element {
    rsx!(
        PortalShell { Outlet::<Route> {} }
    )
}

/// Portal chrome around the signed-in pages: sidebar, header and content area.
///
/// Without a session `children` are rendered bare.
#[component]
pub fn PortalShell(children: Element) -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let mut collapsed = use_signal(|| false);

    if auth.session().is_none() {
        return children;
    }

    rsx!(
        div {
            class: "min-h-screen flex w-full",
            Sidebar { collapsed }
            div {
                class: "flex-1 flex flex-col",
                header {
                    class: "h-16 border-b border-base-300 bg-base-100/95 flex items-center justify-between px-6",
                    button {
                        class: "btn btn-ghost btn-sm btn-square",
                        onclick: move |_| collapsed.toggle(),
                        Icon { width: 16, height: 16, icon: FaBars }
                    }
                    div {
                        class: "flex items-center gap-4",
                        NotificationButton {}
                        button {
                            class: "btn btn-ghost btn-sm flex items-center gap-2",
                            onclick: move |_| toaster.info("Ayuda", "Escríbenos a soporte@universidad.edu"),
                            Icon { width: 16, height: 16, icon: FaCircleQuestion }
                            "Ayuda"
                        }
                    }
                }
                main {
                    class: "flex-1 bg-base-200/30",
                    {children}
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::{
        auth::MemoryStorage,
        client::test_util::{render_portal, settle, signed_in_storage, use_test_contexts},
    };

    #[allow(non_snake_case)]
    fn SignedOut() -> Element {
        use_test_contexts(&MemoryStorage::default(), true);

        rsx!(
            PortalShell {
                p { "Contenido de la página" }
            }
        )
    }

    #[tokio::test]
    /// Expect the page to render bare, without sidebar or header, when nobody is signed in
    async fn renders_page_without_chrome_when_signed_out() {
        let mut dom = VirtualDom::new(SignedOut);
        dom.rebuild_in_place();
        settle(&mut dom, Duration::from_millis(50)).await;

        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Contenido de la página"));
        assert!(!html.contains("Menú Principal"));
        assert!(!html.contains("Ayuda"));
    }

    #[tokio::test]
    /// Expect the sidebar and header around the routed page for a signed-in student
    async fn wraps_page_in_chrome_when_signed_in() {
        let (dom, _) = render_portal("/services", signed_in_storage(), true).await;

        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Menú Principal"));
        assert!(html.contains("Ayuda"));
    }
}
