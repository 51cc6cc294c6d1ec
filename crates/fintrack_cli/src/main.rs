//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `fintrack_core` linkage without the UI shell.
//! - Print an allocation table for `label=value` arguments.
//!
//! Usage: `fintrack_cli [label=value ...]`

use fintrack_core::{build_allocation, top_slices, AllocationItem, AllocationOptions, LogConfig};
use std::process::ExitCode;

const TOP_N: usize = 3;

fn main() -> ExitCode {
    if let Err(err) = LogConfig::from_env().apply() {
        eprintln!("logging disabled: {err}");
    }

    println!("fintrack_core ping={}", fintrack_core::ping());
    println!("fintrack_core version={}", fintrack_core::core_version());

    let items = match parse_items(std::env::args().skip(1)) {
        Ok(items) => items,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if items.is_empty() {
        return ExitCode::SUCCESS;
    }

    let allocation = build_allocation(&items, &AllocationOptions::default());
    if allocation.is_empty() {
        println!("allocation: no data");
        return ExitCode::SUCCESS;
    }
    println!("total={:.2}", allocation.total_value);
    for slice in &allocation.slices {
        println!(
            "{:<16} {:>10.2} {:>6.2}% {:>7.2}..{:<7.2} {}",
            slice.label,
            slice.value,
            slice.percentage,
            slice.start_angle,
            slice.end_angle,
            slice.color
        );
    }

    let top = top_slices(&allocation.slices, TOP_N);
    for entry in &top.ranked {
        println!("#{} {}", entry.rank, entry.slice.label);
    }
    if top.others_count > 0 {
        println!("+{} other(s) {:.2}%", top.others_count, top.others_percentage);
    }
    ExitCode::SUCCESS
}

fn parse_items(args: impl Iterator<Item = String>) -> Result<Vec<AllocationItem>, String> {
    args.map(|arg| {
        let (label, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected label=value, got `{arg}`"))?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid value for `{label}`: {err}"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("value for `{label}` must be a non-negative number"));
        }
        Ok(AllocationItem::new(label.trim(), value))
    })
    .collect()
}
