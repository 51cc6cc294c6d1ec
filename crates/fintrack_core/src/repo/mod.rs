//! Repository layer for transaction storage.
//!
//! # Responsibility
//! - Expose storage-agnostic traits to the service layer.
//! - Keep the backend collaborator behind one seam.

pub mod transaction_repo;
