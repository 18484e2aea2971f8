//! Session and authentication core.
//!
//! Everything the route guards need to decide what to render lives here and is independent of
//! the renderer: the persisted session slot, the authentication provider seam, the service that
//! owns the in-memory session, and the navigation state machine. The Dioxus client and the axum
//! backend both build on these types.

pub mod delay;
pub mod error;
pub mod guard;
pub mod provider;
#[cfg(all(feature = "remote-auth", target_arch = "wasm32"))]
pub mod remote;
pub mod service;
pub mod storage;
pub mod store;

pub use error::{AuthError, StorageError};
pub use guard::{Access, GuardDecision, PortalRoute};
pub use provider::{AuthProvider, MockAuthProvider};
pub use service::{AuthCell, AuthService, AuthState, AuthStatus};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::SessionStore;
