//! Client configuration resolved at compile time.
//!
//! The API base URL is baked into the WASM bundle through the
//! `FOODTRACE_API_BASE_URL` environment variable at build time; everything
//! else is fixed for this deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SHIPMENT_PAGE_SIZE: u32 = 50;
pub const DEMO_ADMIN_USERNAME: &str = "admin1";
pub const DEMO_ADMIN_PASSWORD: &str = "admin1234";

/// Credentials used to bootstrap demo accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub shipment_page_size: u32,
    pub demo_admin: AdminCredentials,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(option_env!("FOODTRACE_API_BASE_URL"))
    }
}

impl ClientConfig {
    /// Build config from an optional base URL override. Blank overrides fall
    /// back to [`DEFAULT_API_BASE_URL`]; trailing slashes are trimmed.
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            api_base_url: base,
            shipment_page_size: DEFAULT_SHIPMENT_PAGE_SIZE,
            demo_admin: AdminCredentials {
                username: DEMO_ADMIN_USERNAME.to_owned(),
                password: DEMO_ADMIN_PASSWORD.to_owned(),
            },
        }
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
