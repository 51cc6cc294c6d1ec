//! Dashboard chart data.
//!
//! # Responsibility
//! - Build pie-chart geometry for allocation views.
//! - Aggregate transactions into the series the dashboard charts draw.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs.

pub mod allocation;
pub mod geometry;
pub mod series;
