//! Pie-chart allocation builder.
//!
//! # Responsibility
//! - Turn weighted `(label, value)` items into contiguous pie wedges.
//! - Rank wedges for the "top N + others" summary.
//!
//! # Invariants
//! - Empty input or a zero total yields no slices, never a degenerate wedge.
//! - Slices keep input order; the first starts at 0 and the last ends at
//!   exactly 360 degrees.
//! - Colors depend only on the label (known categories) or the input
//!   position (everything else), so re-renders are stable.

use crate::chart::geometry::wedge_path;
use crate::model::category::Category;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fallback colors for labels without a reserved category color.
///
/// Disjoint from every `Category::color()` value.
pub const PALETTE: [&str; 10] = [
    "#4f46e5", "#06b6d4", "#f43f5e", "#eab308", "#8b5cf6", "#059669", "#fb923c", "#0284c7",
    "#d946ef", "#65a30d",
];

/// One weighted input item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub label: String,
    pub value: f64,
}

impl AllocationItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Circle placement used for wedge paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationOptions {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            radius: 100.0,
        }
    }
}

/// Renderable pie wedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total in `[0, 100]`.
    pub percentage: f64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path data for the wedge.
    pub path: String,
}

impl AllocationSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Result of `build_allocation`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub slices: Vec<AllocationSlice>,
    pub total_value: f64,
}

impl Allocation {
    /// Whether the caller should render its "no data" state.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Slice with its 1-based rank by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSlice {
    pub rank: usize,
    pub slice: AllocationSlice,
}

/// Top-N view over an allocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopSlices {
    pub ranked: Vec<RankedSlice>,
    /// Number of slices beyond the top N.
    pub others_count: usize,
    pub others_value: f64,
    pub others_percentage: f64,
}

/// Builds pie wedges for `items` in input order.
///
/// Negative or non-finite values are treated as zero weight.
pub fn build_allocation(items: &[AllocationItem], options: &AllocationOptions) -> Allocation {
    let weights = items.iter().map(sanitize_weight).collect::<Vec<_>>();
    let raw_total: f64 = weights.iter().sum();
    if items.is_empty() || raw_total <= 0.0 {
        return Allocation {
            slices: Vec::new(),
            total_value: 0.0,
        };
    }
    // Shares are computed on weights scaled by the largest one when the raw
    // sum overflows; the reported total saturates at `f64::MAX`.
    let (shares, share_total) = if raw_total.is_finite() {
        (weights.clone(), raw_total)
    } else {
        let largest = weights.iter().copied().fold(0.0_f64, f64::max);
        let scaled = weights.iter().map(|value| value / largest).collect::<Vec<_>>();
        let scaled_total = scaled.iter().sum();
        (scaled, scaled_total)
    };
    let total_value = raw_total.min(f64::MAX);

    let last_index = items.len() - 1;
    let mut offset = 0.0_f64;
    let slices = items
        .iter()
        .zip(weights.into_iter().zip(shares))
        .enumerate()
        .map(|(index, (item, (value, share)))| {
            let percentage = share / share_total * 100.0;
            let start_angle = offset;
            let end_angle = if index == last_index {
                360.0
            } else {
                (offset + percentage / 100.0 * 360.0).min(360.0)
            };
            offset = end_angle;

            AllocationSlice {
                label: item.label.clone(),
                value,
                percentage,
                color: slice_color(&item.label, index).to_string(),
                start_angle,
                end_angle,
                path: wedge_path(
                    options.center_x,
                    options.center_y,
                    options.radius,
                    start_angle,
                    end_angle,
                ),
            }
        })
        .collect();

    Allocation {
        slices,
        total_value,
    }
}

/// Ranks slices by value descending and folds the tail into "others".
///
/// Ties keep input order.
pub fn top_slices(slices: &[AllocationSlice], n: usize) -> TopSlices {
    let mut sorted = slices.to_vec();
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    let rest = if sorted.len() > n {
        sorted.split_off(n)
    } else {
        Vec::new()
    };
    let ranked = sorted
        .into_iter()
        .enumerate()
        .map(|(index, slice)| RankedSlice {
            rank: index + 1,
            slice,
        })
        .collect();

    TopSlices {
        ranked,
        others_count: rest.len(),
        others_value: rest.iter().map(|slice| slice.value).sum(),
        others_percentage: rest.iter().map(|slice| slice.percentage).sum(),
    }
}

/// Color for one label at its input position.
pub fn slice_color(label: &str, index: usize) -> &'static str {
    Category::from_label(label)
        .color()
        .unwrap_or(PALETTE[index % PALETTE.len()])
}

fn sanitize_weight(item: &AllocationItem) -> f64 {
    if item.value.is_finite() && item.value >= 0.0 {
        return item.value;
    }
    // Label text stays out of logs.
    warn!(
        "event=allocation_weight_clamped module=chart status=warn value={}",
        item.value
    );
    0.0
}
