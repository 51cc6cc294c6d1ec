//! Spending/income category model.
//!
//! # Responsibility
//! - Replace free-text category labels with an explicit enum.
//! - Own the fixed category -> color mapping used by charts.
//!
//! # Invariants
//! - Every known category maps to exactly one color.
//! - Unknown labels are preserved verbatim as `Category::Custom`.
//! - A `Custom` label that names a known category never survives
//!   deserialization; it is folded into the known variant.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Transaction category shown on dashboard charts and budgets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "CategoryRecord")]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Salary,
    Freelance,
    Stocks,
    Crypto,
    RealEstate,
    Savings,
    Other,
    /// User-defined category with no reserved color.
    Custom(String),
}

/// Wire shape of `Category`; converted through `Category::from_label` for
/// custom labels.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum CategoryRecord {
    Housing,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Salary,
    Freelance,
    Stocks,
    Crypto,
    RealEstate,
    Savings,
    Other,
    Custom(String),
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        match record {
            CategoryRecord::Housing => Self::Housing,
            CategoryRecord::Food => Self::Food,
            CategoryRecord::Transportation => Self::Transportation,
            CategoryRecord::Utilities => Self::Utilities,
            CategoryRecord::Entertainment => Self::Entertainment,
            CategoryRecord::Healthcare => Self::Healthcare,
            CategoryRecord::Shopping => Self::Shopping,
            CategoryRecord::Education => Self::Education,
            CategoryRecord::Salary => Self::Salary,
            CategoryRecord::Freelance => Self::Freelance,
            CategoryRecord::Stocks => Self::Stocks,
            CategoryRecord::Crypto => Self::Crypto,
            CategoryRecord::RealEstate => Self::RealEstate,
            CategoryRecord::Savings => Self::Savings,
            CategoryRecord::Other => Self::Other,
            CategoryRecord::Custom(label) => Self::from_label(&label),
        }
    }
}

impl Category {
    /// Every category with a reserved color, in declaration order.
    pub fn known() -> [Category; 15] {
        [
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Salary,
            Self::Freelance,
            Self::Stocks,
            Self::Crypto,
            Self::RealEstate,
            Self::Savings,
            Self::Other,
        ]
    }

    /// Folds a `Custom` label naming a known category into that variant.
    pub fn normalized(self) -> Self {
        match self {
            Self::Custom(label) => Self::from_label(&label),
            known => known,
        }
    }

    /// Equality after normalization, so `Custom("food")` matches `Food`.
    pub fn same_as(&self, other: &Category) -> bool {
        match (self, other) {
            (Self::Custom(_), _) | (_, Self::Custom(_)) => {
                self.clone().normalized() == other.clone().normalized()
            }
            _ => self == other,
        }
    }

    /// Parses a display or wire label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything unrecognized becomes `Custom` with the trimmed label.
    pub fn from_label(value: &str) -> Self {
        let trimmed = value.trim();
        let normalized = trimmed.to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "housing" | "rent" => Self::Housing,
            "food" | "groceries" => Self::Food,
            "transportation" | "transport" => Self::Transportation,
            "utilities" => Self::Utilities,
            "entertainment" => Self::Entertainment,
            "healthcare" | "health" => Self::Healthcare,
            "shopping" => Self::Shopping,
            "education" => Self::Education,
            "salary" => Self::Salary,
            "freelance" => Self::Freelance,
            "stocks" => Self::Stocks,
            "crypto" => Self::Crypto,
            "real estate" | "realestate" => Self::RealEstate,
            "savings" => Self::Savings,
            "other" => Self::Other,
            _ => Self::Custom(trimmed.to_string()),
        }
    }

    /// Human-readable label; round-trips through `from_label`.
    pub fn label(&self) -> &str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Stocks => "Stocks",
            Self::Crypto => "Crypto",
            Self::RealEstate => "Real Estate",
            Self::Savings => "Savings",
            Self::Other => "Other",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Reserved chart color, `None` for custom categories.
    pub fn color(&self) -> Option<&'static str> {
        let color = match self {
            Self::Housing => "#6366f1",
            Self::Food => "#f59e0b",
            Self::Transportation => "#3b82f6",
            Self::Utilities => "#14b8a6",
            Self::Entertainment => "#ec4899",
            Self::Healthcare => "#ef4444",
            Self::Shopping => "#a855f7",
            Self::Education => "#0ea5e9",
            Self::Salary => "#22c55e",
            Self::Freelance => "#84cc16",
            Self::Stocks => "#2563eb",
            Self::Crypto => "#f97316",
            Self::RealEstate => "#78716c",
            Self::Savings => "#10b981",
            Self::Other => "#94a3b8",
            Self::Custom(_) => return None,
        };
        Some(color)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
