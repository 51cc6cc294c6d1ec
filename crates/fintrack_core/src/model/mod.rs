//! Domain model for the finance dashboard core.
//!
//! # Responsibility
//! - Define canonical data structures used by core logic and FFI.
//! - Keep validation next to the types that own the invariants.
//!
//! # Invariants
//! - Transactions carry non-negative amounts; direction lives in the kind.
//! - Notification ids are opaque and never reused within one queue.

pub mod budget;
pub mod category;
pub mod notification;
pub mod transaction;
