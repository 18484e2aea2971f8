use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::config::Config;

/// Configure cookie sessions backed by the in-process store
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_inactivity_days,
        )))
}
