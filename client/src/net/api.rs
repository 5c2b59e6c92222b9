//! REST API client for the FoodTrace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages and hooks depend on the [`TraceApi`] trait, not on [`HttpApi`], so
//! the login and transformation flows run against in-memory fakes in tests.
//! The trait is `?Send` because browser futures are single-threaded.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::types::{RegisterUserRequest, Session, Shipment, TransformRequest};
use crate::config::ClientConfig;
use crate::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::error::message_from_body;

/// Operations the client needs from the backend.
#[async_trait(?Send)]
pub trait TraceApi {
    /// Authenticate via `POST /api/auth/login`.
    async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError>;

    /// Register a user via `POST /api/auth/register`, authorized by `bearer`.
    async fn register_user(&self, bearer: &str, user: &RegisterUserRequest) -> Result<(), ApiError>;

    /// Fetch up to `limit` shipments owned by the signed-in user.
    async fn my_shipments(&self, limit: u32) -> Result<Vec<Shipment>, ApiError>;

    /// Ledger aliases registered for `role` (e.g. `"distributor"`).
    async fn aliases_by_role(&self, role: &str) -> Result<Vec<String>, ApiError>;

    /// Submit one atomic transformation.
    async fn transform_products(&self, request: &TransformRequest) -> Result<Value, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn my_shipments_path(limit: u32) -> String {
    format!("/api/shipments/my?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn aliases_path(role: &str) -> String {
    let role: String = role.chars().filter(char::is_ascii_alphanumeric).collect();
    format!("/api/aliases?role={role}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the error for a non-success response from its status and raw body.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, message: message_from_body(body) }
}

/// Success body of a call whose payload the client only passes through.
/// Empty bodies (e.g. `204 No Content`) are `Null`; non-JSON text is kept as a string.
#[cfg(any(test, feature = "hydrate"))]
fn lenient_body(body: &str) -> Value {
    let body = body.trim();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

/// Browser HTTP implementation of [`TraceApi`].
///
/// Cheap to clone; clones share the session token.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ClientConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config, token: Arc::new(RwLock::new(None)) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Bearer token attached to authorized calls, if signed in.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }
}

#[cfg(feature = "hydrate")]
impl HttpApi {
    fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::get(&self.config.endpoint(path)), None)
    }

    fn post(&self, path: &str, bearer: Option<&str>) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::post(&self.config.endpoint(path)), bearer)
    }

    fn authorize(&self, builder: gloo_net::http::RequestBuilder, bearer: Option<&str>) -> gloo_net::http::RequestBuilder {
        match bearer.map(str::to_owned).or_else(|| self.token()) {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }
}

/// Turn a non-2xx response into [`ApiError::Status`]; 2xx passes through untouched.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    ensure_ok(resp).await?.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_lenient(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    let body = ensure_ok(resp).await?.text().await.unwrap_or_default();
    Ok(lenient_body(&body))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[async_trait(?Send)]
impl TraceApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::LoginRequest { username, password };
            let resp = gloo_net::http::Request::post(&self.config.endpoint("/api/auth/login"))
                .json(&body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json::<Session>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register_user(&self, bearer: &str, user: &RegisterUserRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .post("/api/auth/register", Some(bearer))
                .json(user)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            // Any 2xx means the account exists; the body is not inspected.
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bearer, user);
            Err(ApiError::Unavailable)
        }
    }

    async fn my_shipments(&self, limit: u32) -> Result<Vec<Shipment>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.get(&my_shipments_path(limit)).send().await.map_err(network)?;
            read_json::<super::types::ShipmentListResponse>(resp)
                .await
                .map(super::types::ShipmentListResponse::into_shipments)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(ApiError::Unavailable)
        }
    }

    async fn aliases_by_role(&self, role: &str) -> Result<Vec<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.get(&aliases_path(role)).send().await.map_err(network)?;
            read_json::<super::types::AliasListResponse>(resp)
                .await
                .map(|body| body.aliases)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
            Err(ApiError::Unavailable)
        }
    }

    async fn transform_products(&self, request: &TransformRequest) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .post("/api/shipments/process/transform", None)
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_lenient(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
