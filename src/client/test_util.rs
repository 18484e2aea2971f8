//! Headless rendering helpers for component tests.

use std::{rc::Rc, time::Duration};

use dioxus::{
    dioxus_core::{NoOpMutations, VirtualDom},
    history::{History, MemoryHistory},
    prelude::*,
};

use crate::{
    auth::{provider::mock_student, AuthState, MemoryStorage, MockAuthProvider, SessionStore},
    client::{
        router::Route,
        store::{toast::ToastQueue, PortalAuth, Toaster},
    },
};

/// Processes queued work and re-renders until nothing happens for `idle`.
pub async fn settle(dom: &mut VirtualDom, idle: Duration) {
    for _ in 0..32 {
        if tokio::time::timeout(idle, dom.wait_for_work()).await.is_err() {
            return;
        }

        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Storage holding the session of a previous visit.
pub fn signed_in_storage() -> MemoryStorage {
    let storage = MemoryStorage::default();
    let _ = SessionStore::new(storage.clone()).save(&mock_student());

    storage
}

/// Provides the toaster and an auth service over `storage`, hydrated when `hydrate` is set.
pub fn use_test_contexts(storage: &MemoryStorage, hydrate: bool) -> PortalAuth {
    let state = use_signal(AuthState::default);
    let queue = use_signal(ToastQueue::default);

    use_context_provider(|| Toaster::new(queue));
    use_context_provider(|| {
        let mut auth = PortalAuth::new(
            MockAuthProvider::instant(),
            SessionStore::new(storage.clone()),
            state,
        );

        if hydrate {
            auth.hydrate();
        }

        auth
    })
}

#[derive(Props, Clone)]
pub struct PortalHarnessProps {
    pub history: Rc<MemoryHistory>,
    pub storage: MemoryStorage,
    pub hydrate: bool,
}

impl PartialEq for PortalHarnessProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.history, &other.history) && self.hydrate == other.hydrate
    }
}

/// The portal router over an in-memory history.
#[allow(non_snake_case)]
pub fn PortalHarness(props: PortalHarnessProps) -> Element {
    use_context_provider(|| props.history.clone() as Rc<dyn History>);
    use_test_contexts(&props.storage, props.hydrate);

    rsx!(Router::<Route> {})
}

/// Renders the portal starting at `path` and lets redirects run their course.
pub async fn render_portal(
    path: &str,
    storage: MemoryStorage,
    hydrate: bool,
) -> (VirtualDom, Rc<MemoryHistory>) {
    let history = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new_with_props(
        PortalHarness,
        PortalHarnessProps {
            history: history.clone(),
            storage,
            hydrate,
        },
    );

    dom.rebuild_in_place();
    settle(&mut dom, Duration::from_millis(100)).await;

    (dom, history)
}
