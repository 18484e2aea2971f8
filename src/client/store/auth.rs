use dioxus::prelude::*;

use crate::auth::{AuthCell, AuthService, AuthState};

#[cfg(all(feature = "remote-auth", target_arch = "wasm32"))]
pub type ClientProvider = crate::auth::remote::HttpAuthProvider;
#[cfg(not(all(feature = "remote-auth", target_arch = "wasm32")))]
pub type ClientProvider = crate::auth::MockAuthProvider;

#[cfg(target_arch = "wasm32")]
pub type ClientStorage = crate::auth::storage::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type ClientStorage = crate::auth::MemoryStorage;

/// The auth service as provided to components through context.
pub type PortalAuth = AuthService<ClientProvider, ClientStorage, Signal<AuthState>>;

impl AuthCell for Signal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.read().clone()
    }

    fn publish(&mut self, state: AuthState) {
        self.set(state);
    }
}

/// Retrieves the auth service; reading its state subscribes the calling component.
pub fn use_auth() -> PortalAuth {
    use_context::<PortalAuth>()
}
