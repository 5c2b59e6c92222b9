//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so individual components can
//! depend on small focused models. `shipments` and `aliases` are the data
//! hooks that feed views from the API.

pub mod aliases;
pub mod auth;
pub mod shipments;
pub mod toast;
