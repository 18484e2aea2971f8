use dioxus::prelude::*;

use crate::{
    auth::{AuthState, SessionStore},
    client::{
        components::ToastStack,
        router::Route,
        store::{
            auth::{ClientProvider, ClientStorage},
            toast::ToastQueue,
            PortalAuth, Toaster,
        },
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let state = use_signal(AuthState::default);
    let queue = use_signal(ToastQueue::default);

    use_context_provider(|| Toaster::new(queue));
    let auth = use_context_provider(|| {
        PortalAuth::new(
            ClientProvider::default(),
            SessionStore::new(ClientStorage::default()),
            state,
        )
    });

    // Restore the stored session once the client is running, then confirm it with the backend
    use_future(move || {
        let mut auth = auth.clone();
        async move {
            auth.hydrate();
            auth.revalidate().await;
        }
    });

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Stylesheet { href: MAIN_CSS }
        Title { "Portal Universitario" }

        Router::<Route> {}
        ToastStack {}
    }
}
