//! Auth-session state and the login capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects. Views never reach for a global login function: they receive an
//! [`Authenticator`], which in the app is a [`SessionAuth`] bound to the
//! shared [`AuthState`] signal and in tests is a fake.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use async_trait::async_trait;
use leptos::prelude::*;
use serde_json::Value;

use crate::error::AuthError;
use crate::net::api::{HttpApi, TraceApi};
use crate::util::session::{self, StoredSession};

#[derive(Clone, Debug, PartialEq)]
pub struct SignedInUser {
    pub username: String,
    /// User record returned by the backend at login, when it sent one.
    pub profile: Option<Value>,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SignedInUser>,
    /// True until the persisted session (if any) has been restored.
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the browser session is being restored.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// The `login(username, password)` capability.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// App authenticator: logs in through the API, then records the session in
/// the shared auth signal, the API client, and `localStorage`.
#[derive(Clone)]
pub struct SessionAuth {
    api: HttpApi,
    auth: RwSignal<AuthState>,
}

impl SessionAuth {
    pub fn new(api: HttpApi, auth: RwSignal<AuthState>) -> Self {
        Self { api, auth }
    }
}

#[async_trait(?Send)]
impl Authenticator for SessionAuth {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let session = self.api.login(username, password).await?;
        if session.token.trim().is_empty() {
            return Err(AuthError::Rejected("Login response did not include a token".to_owned()));
        }
        self.api.set_token(Some(session.token.clone()));
        session::save(&StoredSession { token: session.token, username: username.to_owned() });
        self.auth.set(AuthState {
            user: Some(SignedInUser { username: username.to_owned(), profile: session.user }),
            loading: false,
        });
        log::info!("signed in as {username}");
        Ok(())
    }
}

/// Restore a persisted session into the API client and auth signal.
pub fn restore_session(api: &HttpApi, auth: RwSignal<AuthState>) {
    let user = session::load().map(|stored| {
        api.set_token(Some(stored.token));
        SignedInUser { username: stored.username, profile: None }
    });
    auth.set(AuthState { user, loading: false });
}

/// Forget the session everywhere it is held.
pub fn logout(api: &HttpApi, auth: RwSignal<AuthState>) {
    api.set_token(None);
    session::clear();
    auth.set(AuthState { user: None, loading: false });
}
