//! UI-facing bindings over `fintrack_core`.

pub mod api;
