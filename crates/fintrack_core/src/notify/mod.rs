//! Toast notification queue.
//!
//! Timers are modeled as deadlines against an injectable `Clock` instead of
//! callbacks; the UI event loop polls for expiry.

pub mod clock;
pub mod queue;
