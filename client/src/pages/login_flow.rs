//! Sign-in and demo-provisioning flows behind the login page.
//!
//! DESIGN
//! ======
//! The demo shortcut is a fixed chain of fallible steps:
//!
//! 1. log in with the role's demo credentials; success ends the flow
//! 2. log in as the bootstrap admin directly against the API
//! 3. register the demo account with the admin's bearer token
//! 4. retry the demo login once
//!
//! Each step is its own function returning `Result<_, DemoFailure>` so the
//! chain reads top to bottom with early exit and every transition can be
//! exercised alone.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::config::AdminCredentials;
use crate::error::ApiError;
use crate::net::api::TraceApi;
use crate::net::types::RegisterUserRequest;
use crate::state::auth::Authenticator;
use crate::state::toast::Notice;

/// Role tags offered by the demo shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoRole {
    #[default]
    Farmer,
    Processor,
    Distributor,
    Retailer,
    Certifier,
    Admin,
}

/// Fixed demo account for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoUser {
    pub role: DemoRole,
    pub username: &'static str,
    pub password: &'static str,
    pub chaincode_alias: &'static str,
}

impl DemoRole {
    pub const ALL: [DemoRole; 6] =
        [Self::Farmer, Self::Processor, Self::Distributor, Self::Retailer, Self::Certifier, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Processor => "processor",
            Self::Distributor => "distributor",
            Self::Retailer => "retailer",
            Self::Certifier => "certifier",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Processor => "Processor",
            Self::Distributor => "Distributor",
            Self::Retailer => "Retailer",
            Self::Certifier => "Certifier",
            Self::Admin => "Admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    pub fn demo_user(self) -> DemoUser {
        let (username, chaincode_alias) = match self {
            Self::Farmer => ("testf", "DemoFarmer"),
            Self::Processor => ("testp", "DemoProcessor"),
            Self::Distributor => ("testd", "DemoDistributor"),
            Self::Retailer => ("testr", "DemoRetailer"),
            Self::Certifier => ("testc", "DemoCertifier"),
            Self::Admin => ("testa", "DemoAdmin"),
        };
        DemoUser { role: self, username, password: username, chaincode_alias }
    }
}

impl DemoUser {
    pub fn registration(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            username: self.username.to_owned(),
            password: self.password.to_owned(),
            chaincode_alias: self.chaincode_alias.to_owned(),
            role: self.role.as_str().to_owned(),
        }
    }
}

// =============================================================
// Standard sign-in
// =============================================================

/// Trim and require both credentials.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Run the standard login. `Ok` carries the success toast, `Err` the failure toast.
pub async fn sign_in(auth: &dyn Authenticator, username: &str, password: &str) -> Result<Notice, Notice> {
    let (username, password) =
        validate_credentials(username, password).map_err(|msg| Notice::error("Login failed", Some(msg.to_owned())))?;
    match auth.login(&username, &password).await {
        Ok(()) => Ok(Notice::success("Login successful", "Welcome to FoodTrace!")),
        Err(err) => {
            let message = err.user_message();
            let message = if message.trim().is_empty() { "Invalid credentials".to_owned() } else { message };
            Err(Notice::error("Login failed", Some(message)))
        }
    }
}

// =============================================================
// Demo provisioning
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoStep {
    AdminLogin,
    Register,
    RetryLogin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoFailure {
    pub step: DemoStep,
    pub message: String,
}

impl DemoFailure {
    fn at(step: DemoStep, message: impl Into<String>) -> Self {
        Self { step, message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DemoOutcome {
    /// The demo account already existed.
    LoggedIn(DemoRole),
    /// The account was created through the admin path, then logged in.
    Provisioned(DemoRole),
    Failed(DemoFailure),
}

impl DemoOutcome {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_) | Self::Provisioned(_))
    }

    pub fn notice(&self) -> Notice {
        match self {
            Self::LoggedIn(role) => Notice::success("Demo login successful", format!("Logged in as {}", role.as_str())),
            Self::Provisioned(role) => Notice::success("Demo account created", format!("Logged in as {}", role.as_str())),
            Self::Failed(failure) => {
                let message = if failure.message.trim().is_empty() { "Unknown error" } else { failure.message.as_str() };
                Notice::error("Demo signup failed", Some(message.to_owned()))
            }
        }
    }
}

/// Log in as `role`'s demo account, provisioning it first if the direct
/// login fails.
pub async fn demo_sign_in(
    auth: &dyn Authenticator,
    api: &dyn TraceApi,
    admin: &AdminCredentials,
    role: DemoRole,
) -> DemoOutcome {
    let user = role.demo_user();
    match auth.login(user.username, user.password).await {
        Ok(()) => return DemoOutcome::LoggedIn(role),
        Err(err) => log::debug!("demo login for {} failed, provisioning: {err}", user.username),
    }
    match provision(auth, api, admin, &user).await {
        Ok(()) => DemoOutcome::Provisioned(role),
        Err(failure) => {
            log::warn!("demo provisioning failed at {:?}: {}", failure.step, failure.message);
            DemoOutcome::Failed(failure)
        }
    }
}

async fn provision(
    auth: &dyn Authenticator,
    api: &dyn TraceApi,
    admin: &AdminCredentials,
    user: &DemoUser,
) -> Result<(), DemoFailure> {
    let admin_token = admin_login(api, admin).await?;
    // The account may exist even when registration reports an error, so the
    // retry always runs. If it also fails, the registration error is the cause.
    let registered = register_demo_user(api, &admin_token, user).await;
    if let Err(failure) = &registered {
        log::warn!("demo registration for {} failed: {}", user.username, failure.message);
    }
    retry_login(auth, user).await.map_err(|retry| registered.err().unwrap_or(retry))
}

/// Step 2: obtain an admin bearer token.
pub async fn admin_login(api: &dyn TraceApi, admin: &AdminCredentials) -> Result<String, DemoFailure> {
    let session = api.login(&admin.username, &admin.password).await.map_err(|err| {
        let message = match &err {
            ApiError::Status { .. } => err.server_message().unwrap_or("Admin login failed").to_owned(),
            other => other.user_message(),
        };
        DemoFailure::at(DemoStep::AdminLogin, message)
    })?;
    if session.token.trim().is_empty() {
        return Err(DemoFailure::at(DemoStep::AdminLogin, "Admin login failed"));
    }
    Ok(session.token)
}

/// Step 3: register the demo account.
pub async fn register_demo_user(api: &dyn TraceApi, admin_token: &str, user: &DemoUser) -> Result<(), DemoFailure> {
    api.register_user(admin_token, &user.registration())
        .await
        .map_err(|err| DemoFailure::at(DemoStep::Register, err.user_message()))
}

/// Step 4: the single retry of the demo login.
pub async fn retry_login(auth: &dyn Authenticator, user: &DemoUser) -> Result<(), DemoFailure> {
    auth.login(user.username, user.password)
        .await
        .map_err(|err| DemoFailure::at(DemoStep::RetryLogin, err.user_message()))
}
