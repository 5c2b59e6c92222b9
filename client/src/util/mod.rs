//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! randomness) and pure math (map projection) from page and component logic
//! so the latter stay testable.

pub mod auth;
pub mod geo;
pub mod ids;
pub mod mount_guard;
pub mod session;
pub mod timestamp;
