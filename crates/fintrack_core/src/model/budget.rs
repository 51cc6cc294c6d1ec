//! Budget limit model.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Spending limit for one category over the caller's chosen period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: Category,
    pub limit: f64,
}

/// Validation failures for budget limits.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    InvalidLimit(f64),
}

impl Display for BudgetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLimit(value) => {
                write!(f, "budget limit ({value}) must be finite and >= 0")
            }
        }
    }
}

impl Error for BudgetValidationError {}

impl Budget {
    /// Validates `limit`; a `Custom` category naming a known one is folded
    /// into the known variant.
    pub fn new(category: Category, limit: f64) -> Result<Self, BudgetValidationError> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(BudgetValidationError::InvalidLimit(limit));
        }
        Ok(Self {
            category: category.normalized(),
            limit,
        })
    }
}
