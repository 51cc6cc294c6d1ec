//! Core domain logic for the fintrack dashboard.
//! This crate is the single source of truth for business invariants.

pub mod chart;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use chart::allocation::{
    build_allocation, slice_color, top_slices, Allocation, AllocationItem, AllocationOptions,
    AllocationSlice, RankedSlice, TopSlices, PALETTE,
};
pub use chart::geometry::{polar_point, wedge_path};
pub use chart::series::{
    budget_usage, category_totals, daily_totals, daily_totals_window, summarize, BudgetUsage,
    CashflowSummary, DailyTotals, MAX_WINDOW_DAYS,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::budget::{Budget, BudgetValidationError};
pub use model::category::Category;
pub use model::notification::{Notification, NotificationId, NotificationKind, DEFAULT_DURATION_MS};
pub use model::transaction::{
    epoch_day, Transaction, TransactionId, TransactionKind, TransactionValidationError,
    MS_PER_DAY,
};
pub use notify::clock::{Clock, ManualClock, SystemClock};
pub use notify::queue::{
    Listener, NotificationQueue, QueueConfig, SubscriptionId, DEFAULT_EXIT_DELAY_MS,
};
pub use repo::transaction_repo::{
    InMemoryTransactionRepository, RepoError, RepoResult, TransactionRepository,
};
pub use service::ledger_service::{LedgerService, RecordRequest};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
