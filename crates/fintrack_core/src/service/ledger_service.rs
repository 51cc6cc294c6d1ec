//! Ledger use-case service.
//!
//! # Responsibility
//! - Provide record/delete entry points for the transaction modal flows.
//! - Derive dashboard views (summary, charts, budgets) from stored data.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Derived views are recomputed from the repository on every call.

use crate::chart::allocation::{build_allocation, Allocation, AllocationItem, AllocationOptions};
use crate::chart::series::{
    budget_usage, category_totals, daily_totals, daily_totals_window, summarize, BudgetUsage,
    CashflowSummary, DailyTotals,
};
use crate::model::budget::Budget;
use crate::model::category::Category;
use crate::model::transaction::{Transaction, TransactionId, TransactionKind};
use crate::repo::transaction_repo::{RepoResult, TransactionRepository};
use log::debug;

/// Request model shared by the record helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRequest {
    pub category: Category,
    pub amount: f64,
    pub description: String,
    /// Unix epoch milliseconds.
    pub occurred_at_ms: i64,
}

/// Use-case service over a transaction repository.
pub struct LedgerService<R: TransactionRepository> {
    repo: R,
}

impl<R: TransactionRepository> LedgerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a pre-built transaction.
    pub fn record(&self, transaction: &Transaction) -> RepoResult<TransactionId> {
        let id = self.repo.insert(transaction)?;
        debug!(
            "event=transaction_record module=ledger status=ok id={} kind={}",
            id,
            transaction.kind.as_str()
        );
        Ok(id)
    }

    pub fn record_income(&self, request: &RecordRequest) -> RepoResult<TransactionId> {
        self.record_kind(TransactionKind::Income, request)
    }

    pub fn record_expense(&self, request: &RecordRequest) -> RepoResult<TransactionId> {
        self.record_kind(TransactionKind::Expense, request)
    }

    pub fn record_investment(&self, request: &RecordRequest) -> RepoResult<TransactionId> {
        self.record_kind(TransactionKind::Investment, request)
    }

    pub fn delete(&self, id: TransactionId) -> RepoResult<()> {
        self.repo.delete(id)?;
        debug!("event=transaction_delete module=ledger status=ok id={id}");
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        self.repo.get(id)
    }

    pub fn transactions(&self) -> RepoResult<Vec<Transaction>> {
        self.repo.list()
    }

    pub fn summary(&self) -> RepoResult<CashflowSummary> {
        Ok(summarize(&self.repo.list()?))
    }

    pub fn daily_totals(&self) -> RepoResult<Vec<DailyTotals>> {
        Ok(daily_totals(&self.repo.list()?))
    }

    pub fn daily_totals_window(&self, end_day: i64, days: usize) -> RepoResult<Vec<DailyTotals>> {
        Ok(daily_totals_window(&self.repo.list()?, end_day, days))
    }

    pub fn category_totals(&self, kind: TransactionKind) -> RepoResult<Vec<AllocationItem>> {
        Ok(category_totals(&self.repo.list()?, kind))
    }

    /// Pie allocation of one transaction kind by category.
    ///
    /// `TransactionKind::Investment` gives the portfolio view.
    pub fn allocation_by_category(
        &self,
        kind: TransactionKind,
        options: &AllocationOptions,
    ) -> RepoResult<Allocation> {
        let items = self.category_totals(kind)?;
        Ok(build_allocation(&items, options))
    }

    pub fn budget_usage(&self, budgets: &[Budget]) -> RepoResult<Vec<BudgetUsage>> {
        Ok(budget_usage(budgets, &self.repo.list()?))
    }

    fn record_kind(
        &self,
        kind: TransactionKind,
        request: &RecordRequest,
    ) -> RepoResult<TransactionId> {
        let transaction = Transaction::new(
            kind,
            request.category.clone(),
            request.amount,
            request.occurred_at_ms,
        )?
        .described(request.description.clone());
        self.record(&transaction)
    }
}
