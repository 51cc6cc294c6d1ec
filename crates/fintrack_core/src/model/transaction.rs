//! Transaction domain model.
//!
//! # Responsibility
//! - Define the canonical income/expense/investment record.
//! - Validate amounts before any aggregation consumes them.
//!
//! # Invariants
//! - `id` is never nil and never reused for another transaction.
//! - `amount` is finite and `>= 0`; direction is carried by `kind`.
//! - Deserialized records pass the same validation as constructed ones.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one transaction.
pub type TransactionId = Uuid;

/// Direction of money flow for one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
    Investment,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Investment => "investment",
        }
    }
}

/// Validation failures for transaction records.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NilId,
    NonFiniteAmount,
    NegativeAmount(f64),
}

impl Display for TransactionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "transaction id must not be nil"),
            Self::NonFiniteAmount => write!(f, "transaction amount must be finite"),
            Self::NegativeAmount(value) => {
                write!(f, "transaction amount ({value}) must be >= 0")
            }
        }
    }
}

impl Error for TransactionValidationError {}

/// One recorded money movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    /// Currency amount, always non-negative.
    pub amount: f64,
    pub description: String,
    /// Unix epoch milliseconds.
    pub occurred_at_ms: i64,
}

/// Unvalidated wire shape; converted through `Transaction::validate`.
#[derive(Deserialize)]
struct TransactionRecord {
    id: TransactionId,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: Category,
    amount: f64,
    #[serde(default)]
    description: String,
    occurred_at_ms: i64,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionValidationError;

    fn try_from(value: TransactionRecord) -> Result<Self, Self::Error> {
        let transaction = Self {
            id: value.id,
            kind: value.kind,
            category: value.category,
            amount: value.amount,
            description: value.description,
            occurred_at_ms: value.occurred_at_ms,
        };
        transaction.validate()?;
        Ok(transaction)
    }
}

impl Transaction {
    /// Creates a validated transaction with a generated id.
    pub fn new(
        kind: TransactionKind,
        category: Category,
        amount: f64,
        occurred_at_ms: i64,
    ) -> Result<Self, TransactionValidationError> {
        Self::with_id(Uuid::new_v4(), kind, category, amount, occurred_at_ms)
    }

    /// Creates a validated transaction with a caller-provided id.
    ///
    /// Used when identity comes from the backend collaborator.
    pub fn with_id(
        id: TransactionId,
        kind: TransactionKind,
        category: Category,
        amount: f64,
        occurred_at_ms: i64,
    ) -> Result<Self, TransactionValidationError> {
        let transaction = Self {
            id,
            kind,
            category: category.normalized(),
            amount,
            description: String::new(),
            occurred_at_ms,
        };
        transaction.validate()?;
        Ok(transaction)
    }

    /// Builder-style description setter.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.is_nil() {
            return Err(TransactionValidationError::NilId);
        }
        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    /// UTC day number since the Unix epoch.
    pub fn epoch_day(&self) -> i64 {
        epoch_day(self.occurred_at_ms)
    }
}

/// Milliseconds in one UTC day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Maps epoch milliseconds to a UTC day number, flooring negative values.
pub fn epoch_day(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(MS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::{epoch_day, Transaction, TransactionKind, TransactionValidationError, MS_PER_DAY};
    use crate::model::category::Category;
    use uuid::Uuid;

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        let negative = Transaction::new(TransactionKind::Expense, Category::Food, -1.0, 0);
        assert_eq!(
            negative.unwrap_err(),
            TransactionValidationError::NegativeAmount(-1.0)
        );

        let nan = Transaction::new(TransactionKind::Expense, Category::Food, f64::NAN, 0);
        assert_eq!(nan.unwrap_err(), TransactionValidationError::NonFiniteAmount);
    }

    #[test]
    fn rejects_nil_id() {
        let err = Transaction::with_id(
            Uuid::nil(),
            TransactionKind::Income,
            Category::Salary,
            10.0,
            0,
        )
        .unwrap_err();
        assert_eq!(err, TransactionValidationError::NilId);
    }

    #[test]
    fn epoch_day_floors_before_epoch() {
        assert_eq!(epoch_day(0), 0);
        assert_eq!(epoch_day(MS_PER_DAY - 1), 0);
        assert_eq!(epoch_day(MS_PER_DAY), 1);
        assert_eq!(epoch_day(-1), -1);
    }
}
