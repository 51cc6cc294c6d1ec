//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI shell via FRB.
//! - Own the process-wide notification queue the shell polls.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Notification ids cross the boundary as raw `u64` values.

use fintrack_core::{
    build_allocation, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, top_slices, AllocationItem, AllocationOptions, AllocationSlice,
    NotificationId, NotificationKind, NotificationQueue, SystemClock,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

const TOP_DEFAULT_LIMIT: u32 = 3;

static NOTIFICATIONS: OnceLock<Mutex<NotificationQueue<SystemClock>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Notification row rendered by the toast stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u64,
    /// `success|error|warning|info`.
    pub kind: String,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: u64,
    /// True while the exit transition runs.
    pub leaving: bool,
}

/// Full toast stack state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSnapshot {
    /// Bumped on every change; equal revisions mean nothing to redraw.
    pub revision: u64,
    pub items: Vec<NotificationItem>,
    /// Queue-clock deadline of the next timer.
    pub next_deadline_ms: Option<u64>,
    /// Queue-clock reading taken with this snapshot; the origin of
    /// `next_deadline_ms`.
    pub now_ms: u64,
    /// Delay before the next `notify_poll_expired` is useful, `Some(0)` when
    /// a timer is already due.
    pub next_due_in_ms: Option<u64>,
}

/// Result envelope for `notify_add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyResponse {
    pub ok: bool,
    pub id: Option<u64>,
    pub message: String,
}

/// Adds a notification from a string kind label.
///
/// # FFI contract
/// - Unknown `kind` labels fail without touching the queue.
/// - `duration_ms` of `None` or `0` uses the 5000 ms default.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_add(
    kind: String,
    title: String,
    message: Option<String>,
    duration_ms: Option<u64>,
) -> NotifyResponse {
    let Some(kind) = NotificationKind::from_label(kind.as_str()) else {
        return NotifyResponse {
            ok: false,
            id: None,
            message: format!("notify_add failed: unknown kind `{}`", kind.trim()),
        };
    };
    let id = with_queue(|queue| queue.add(kind, title, message.as_deref(), duration_ms));
    NotifyResponse {
        ok: true,
        id: Some(id.as_u64()),
        message: "Notification added.".to_string(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn notify_success(title: String, message: Option<String>, duration_ms: Option<u64>) -> u64 {
    with_queue(|queue| queue.success(title, message.as_deref(), duration_ms)).as_u64()
}

#[flutter_rust_bridge::frb(sync)]
pub fn notify_error(title: String, message: Option<String>, duration_ms: Option<u64>) -> u64 {
    with_queue(|queue| queue.error(title, message.as_deref(), duration_ms)).as_u64()
}

#[flutter_rust_bridge::frb(sync)]
pub fn notify_warning(title: String, message: Option<String>, duration_ms: Option<u64>) -> u64 {
    with_queue(|queue| queue.warning(title, message.as_deref(), duration_ms)).as_u64()
}

#[flutter_rust_bridge::frb(sync)]
pub fn notify_info(title: String, message: Option<String>, duration_ms: Option<u64>) -> u64 {
    with_queue(|queue| queue.info(title, message.as_deref(), duration_ms)).as_u64()
}

/// Removes a notification immediately; unknown ids return `false`.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_remove(id: u64) -> bool {
    with_queue(|queue| queue.remove(NotificationId::from(id)))
}

/// Starts the exit transition (close button path).
#[flutter_rust_bridge::frb(sync)]
pub fn notify_dismiss(id: u64) -> bool {
    with_queue(|queue| queue.dismiss(NotificationId::from(id)))
}

/// Removes every due notification and returns their ids.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_poll_expired() -> Vec<u64> {
    with_queue(|queue| {
        queue
            .poll_expired()
            .into_iter()
            .map(NotificationId::as_u64)
            .collect()
    })
}

/// Current toast stack in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_snapshot() -> NotificationSnapshot {
    with_queue(|queue| {
        let now_ms = queue.now_ms();
        let next_deadline_ms = queue.next_deadline();
        NotificationSnapshot {
            revision: queue.revision(),
            items: queue
                .list()
                .into_iter()
                .map(|record| NotificationItem {
                    id: record.id.as_u64(),
                    kind: record.kind.as_str().to_string(),
                    leaving: queue.is_leaving(record.id),
                    title: record.title,
                    message: record.message,
                    duration_ms: record.duration_ms,
                })
                .collect(),
            next_deadline_ms,
            now_ms,
            next_due_in_ms: next_deadline_ms.map(|deadline| deadline.saturating_sub(now_ms)),
        }
    })
}

/// Pie wedge shape sent to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSliceItem {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
}

/// Allocation envelope; empty `slices` means "render no-data state".
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResponse {
    pub slices: Vec<AllocationSliceItem>,
    pub total_value: f64,
    pub message: String,
}

/// Ranked wedge for the top-N legend.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSliceItem {
    pub rank: u32,
    pub slice: AllocationSliceItem,
}

/// Top-N legend envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSlicesResponse {
    pub ranked: Vec<RankedSliceItem>,
    pub others_count: u32,
    pub others_value: f64,
    pub others_percentage: f64,
    pub message: String,
}

/// Builds pie wedges from parallel label/value lists.
///
/// # FFI contract
/// - Mismatched list lengths return an empty allocation with a message.
/// - `radius` of `None` keeps the default 100-unit circle centered at 100,100.
#[flutter_rust_bridge::frb(sync)]
pub fn allocation_build(
    labels: Vec<String>,
    values: Vec<f64>,
    radius: Option<f64>,
) -> AllocationResponse {
    let items = match zip_items(labels, values) {
        Ok(items) => items,
        Err(message) => {
            return AllocationResponse {
                slices: Vec::new(),
                total_value: 0.0,
                message,
            }
        }
    };
    let allocation = build_allocation(&items, &options_for(radius));
    let message = if allocation.is_empty() {
        "No data.".to_string()
    } else {
        format!("Built {} slice(s).", allocation.slices.len())
    };
    AllocationResponse {
        slices: allocation.slices.into_iter().map(to_slice_item).collect(),
        total_value: allocation.total_value,
        message,
    }
}

/// Ranks wedges by value and folds everything past `limit` into "others".
///
/// `limit` of `None` or `0` uses 3.
#[flutter_rust_bridge::frb(sync)]
pub fn allocation_top(
    labels: Vec<String>,
    values: Vec<f64>,
    limit: Option<u32>,
) -> TopSlicesResponse {
    let items = match zip_items(labels, values) {
        Ok(items) => items,
        Err(message) => {
            return TopSlicesResponse {
                ranked: Vec::new(),
                others_count: 0,
                others_value: 0.0,
                others_percentage: 0.0,
                message,
            }
        }
    };
    let limit = match limit {
        Some(0) | None => TOP_DEFAULT_LIMIT,
        Some(value) => value,
    };
    let allocation = build_allocation(&items, &AllocationOptions::default());
    let top = top_slices(&allocation.slices, limit as usize);
    TopSlicesResponse {
        ranked: top
            .ranked
            .into_iter()
            .map(|entry| RankedSliceItem {
                rank: saturating_u32(entry.rank),
                slice: to_slice_item(entry.slice),
            })
            .collect(),
        others_count: saturating_u32(top.others_count),
        others_value: top.others_value,
        others_percentage: top.others_percentage,
        message: String::new(),
    }
}

fn with_queue<T>(f: impl FnOnce(&mut NotificationQueue<SystemClock>) -> T) -> T {
    let mutex =
        NOTIFICATIONS.get_or_init(|| Mutex::new(NotificationQueue::new(SystemClock::new())));
    let mut guard: MutexGuard<'_, _> = mutex.lock().unwrap_or_else(|poisoned| {
        warn!("event=queue_lock_recovered module=ffi status=warn");
        poisoned.into_inner()
    });
    f(&mut guard)
}

fn zip_items(labels: Vec<String>, values: Vec<f64>) -> Result<Vec<AllocationItem>, String> {
    if labels.len() != values.len() {
        return Err(format!(
            "allocation input mismatch: {} label(s) vs {} value(s)",
            labels.len(),
            values.len()
        ));
    }
    Ok(labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| AllocationItem::new(label, value))
        .collect())
}

fn options_for(radius: Option<f64>) -> AllocationOptions {
    match radius {
        Some(radius) if radius.is_finite() && radius > 0.0 => AllocationOptions {
            center_x: radius,
            center_y: radius,
            radius,
        },
        _ => AllocationOptions::default(),
    }
}

fn to_slice_item(slice: AllocationSlice) -> AllocationSliceItem {
    AllocationSliceItem {
        label: slice.label,
        value: slice.value,
        percentage: slice.percentage,
        color: slice.color,
        start_angle: slice.start_angle,
        end_angle: slice.end_angle,
        path: slice.path,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
