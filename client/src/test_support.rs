//! In-memory backend used by flow and hook tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::{DEMO_ADMIN_PASSWORD, DEMO_ADMIN_USERNAME};
use crate::error::{ApiError, AuthError};
use crate::net::api::TraceApi;
use crate::net::types::{RegisterUserRequest, Session, Shipment, TransformRequest};
use crate::state::auth::Authenticator;

/// Fake backend that implements both the API and the login capability and
/// records every call in order.
pub(crate) struct FakeBackend {
    pub accounts: RefCell<HashMap<String, String>>,
    pub calls: RefCell<Vec<String>>,
    pub shipments: Result<Vec<Shipment>, ApiError>,
    pub aliases: Result<Vec<String>, ApiError>,
    pub transform_result: Result<Value, ApiError>,
    pub transform_requests: RefCell<Vec<TransformRequest>>,
    /// When set, every call fails with this error before touching state.
    pub outage: Option<ApiError>,
    /// When set, registration creates the account and then reports this error.
    pub register_error: Option<ApiError>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(DEMO_ADMIN_USERNAME.to_owned(), DEMO_ADMIN_PASSWORD.to_owned());
        Self {
            accounts: RefCell::new(accounts),
            calls: RefCell::new(Vec::new()),
            shipments: Ok(Vec::new()),
            aliases: Ok(Vec::new()),
            transform_result: Ok(json!({ "ok": true })),
            transform_requests: RefCell::new(Vec::new()),
            outage: None,
            register_error: None,
        }
    }

    pub fn with_account(self, username: &str, password: &str) -> Self {
        self.accounts.borrow_mut().insert(username.to_owned(), password.to_owned());
        self
    }

    pub fn without_account(self, username: &str) -> Self {
        self.accounts.borrow_mut().remove(username);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.outage {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn check_password(&self, username: &str, password: &str) -> Result<(), ApiError> {
        match self.accounts.borrow().get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) }),
        }
    }
}

pub(crate) fn token_for(username: &str) -> String {
    format!("token-{username}")
}

#[async_trait(?Send)]
impl TraceApi for FakeBackend {
    async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        self.record(format!("api.login {username}"))?;
        self.check_password(username, password)?;
        Ok(Session { token: token_for(username), user: Some(json!({ "username": username })) })
    }

    async fn register_user(&self, bearer: &str, user: &RegisterUserRequest) -> Result<(), ApiError> {
        self.record(format!("api.register {}", user.username))?;
        if bearer != token_for(DEMO_ADMIN_USERNAME) {
            return Err(ApiError::Status { status: 403, message: Some("Admin privileges required".to_owned()) });
        }
        let mut accounts = self.accounts.borrow_mut();
        if accounts.contains_key(&user.username) {
            return Err(ApiError::Status { status: 409, message: Some("User already exists".to_owned()) });
        }
        accounts.insert(user.username.clone(), user.password.clone());
        match &self.register_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn my_shipments(&self, limit: u32) -> Result<Vec<Shipment>, ApiError> {
        self.record(format!("api.my_shipments {limit}"))?;
        self.shipments.clone().map(|mut list| {
            list.truncate(limit as usize);
            list
        })
    }

    async fn aliases_by_role(&self, role: &str) -> Result<Vec<String>, ApiError> {
        self.record(format!("api.aliases {role}"))?;
        self.aliases.clone()
    }

    async fn transform_products(&self, request: &TransformRequest) -> Result<Value, ApiError> {
        self.record("api.transform".to_owned())?;
        self.transform_requests.borrow_mut().push(request.clone());
        self.transform_result.clone()
    }
}

#[async_trait(?Send)]
impl Authenticator for FakeBackend {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.record(format!("auth.login {username}"))?;
        self.check_password(username, password)?;
        Ok(())
    }
}
