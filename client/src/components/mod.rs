//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render maps and notifications while reading shared state from
//! Leptos context providers. They never talk to the API themselves.

pub mod map_picker;
pub mod map_surface;
pub mod shipment_map_view;
pub mod toast_stack;
