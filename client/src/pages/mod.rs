//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Flow logic that does not need a DOM lives in the
//! `*_flow`/`*_form` modules so it can be exercised against a fake backend.

pub mod dashboard;
pub mod login;
pub mod login_flow;
pub mod transform;
pub mod transform_form;
