//! Transaction aggregations behind dashboard charts and budget cards.
//!
//! # Invariants
//! - Each function is one pass over its input plus a final sort/fill.
//! - Day buckets are UTC epoch days (`model::transaction::epoch_day`).

use crate::chart::allocation::AllocationItem;
use crate::model::budget::Budget;
use crate::model::category::Category;
use crate::model::transaction::{Transaction, TransactionKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals per money-flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashflowSummary {
    pub income: f64,
    pub expenses: f64,
    pub investments: f64,
    /// `income - expenses - investments`.
    pub net: f64,
}

/// Per-day totals for bar/line charts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTotals {
    /// UTC day number since the Unix epoch.
    pub day: i64,
    pub income: f64,
    pub expenses: f64,
    pub investments: f64,
}

impl DailyTotals {
    fn empty(day: i64) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    fn add(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Income => self.income += transaction.amount,
            TransactionKind::Expense => self.expenses += transaction.amount,
            TransactionKind::Investment => self.investments += transaction.amount,
        }
    }
}

/// Spend against one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub category: Category,
    pub limit: f64,
    pub spent: f64,
    /// `limit - spent`, negative when over budget.
    pub remaining: f64,
    /// `None` when `limit == 0`.
    pub percent_used: Option<f64>,
    pub over_budget: bool,
}

pub fn summarize(transactions: &[Transaction]) -> CashflowSummary {
    let mut summary = CashflowSummary::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => summary.income += transaction.amount,
            TransactionKind::Expense => summary.expenses += transaction.amount,
            TransactionKind::Investment => summary.investments += transaction.amount,
        }
    }
    summary.net = summary.income - summary.expenses - summary.investments;
    summary
}

/// Groups transactions by UTC day, ascending; days without activity are
/// omitted.
pub fn daily_totals(transactions: &[Transaction]) -> Vec<DailyTotals> {
    let mut buckets: BTreeMap<i64, DailyTotals> = BTreeMap::new();
    for transaction in transactions {
        let day = transaction.epoch_day();
        buckets
            .entry(day)
            .or_insert_with(|| DailyTotals::empty(day))
            .add(transaction);
    }
    buckets.into_values().collect()
}

/// Largest window `daily_totals_window` will allocate, about ten years.
pub const MAX_WINDOW_DAYS: usize = 3_660;

/// Exactly `days` consecutive entries ending at `end_day`, zero-filled.
///
/// `days` is clamped to `MAX_WINDOW_DAYS`. Transactions outside the window
/// are ignored.
pub fn daily_totals_window(
    transactions: &[Transaction],
    end_day: i64,
    days: usize,
) -> Vec<DailyTotals> {
    if days == 0 {
        return Vec::new();
    }
    let days = days.min(MAX_WINDOW_DAYS);
    let span = i64::try_from(days).unwrap_or(i64::MAX);
    let start_day = end_day.saturating_sub(span - 1);
    let mut window = (0..days)
        .map(|offset| DailyTotals::empty(start_day + offset as i64))
        .collect::<Vec<_>>();

    for transaction in transactions {
        let day = transaction.epoch_day();
        if day < start_day || day > end_day {
            continue;
        }
        if let Some(bucket) = usize::try_from(day - start_day)
            .ok()
            .and_then(|index| window.get_mut(index))
        {
            bucket.add(transaction);
        }
    }
    window
}

/// Sums amounts of one kind per category label, in first-seen order.
///
/// The result feeds `build_allocation` directly.
pub fn category_totals(transactions: &[Transaction], kind: TransactionKind) -> Vec<AllocationItem> {
    let mut items: Vec<AllocationItem> = Vec::new();
    for transaction in transactions.iter().filter(|tx| tx.kind == kind) {
        let label = transaction.category.label();
        match items.iter_mut().find(|item| item.label == label) {
            Some(item) => item.value += transaction.amount,
            None => items.push(AllocationItem::new(label, transaction.amount)),
        }
    }
    items
}

/// Expense spend per budget, in budget order.
///
/// Categories are compared with `Category::same_as`.
pub fn budget_usage(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetUsage> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = transactions
                .iter()
                .filter(|tx| {
                    tx.kind == TransactionKind::Expense && tx.category.same_as(&budget.category)
                })
                .map(|tx| tx.amount)
                .sum();
            let percent_used = (budget.limit > 0.0).then(|| spent / budget.limit * 100.0);
            BudgetUsage {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                remaining: budget.limit - spent,
                percent_used,
                over_budget: spent > budget.limit,
            }
        })
        .collect()
}
