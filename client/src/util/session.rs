//! Session persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic and always starts signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "foodtrace_session";

/// What survives a page reload: the bearer token and who it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
}

pub fn encode(session: &StoredSession) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

/// Decode a stored value; corrupt or blank-token entries count as absent.
pub fn decode(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.token.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session, if any.
pub fn load() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save(session: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, &encode(session));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
