//! Networking modules for the FoodTrace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the [`api::TraceApi`] seam and its browser HTTP
//! implementation, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
