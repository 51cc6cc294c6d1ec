//! Transaction repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the storage seam toward the backend collaborator.
//! - Provide an ordered in-memory store for the dashboard session.
//!
//! # Invariants
//! - Write paths call `Transaction::validate()` before mutating.
//! - Ids are unique within one repository.
//! - `list` returns records in insertion order.

use crate::model::transaction::{Transaction, TransactionId, TransactionValidationError};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for transaction storage operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(TransactionValidationError),
    DuplicateId(TransactionId),
    NotFound(TransactionId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "transaction already exists: {id}"),
            Self::NotFound(id) => write!(f, "transaction not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<TransactionValidationError> for RepoError {
    fn from(value: TransactionValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage interface for transactions.
pub trait TransactionRepository {
    fn insert(&self, transaction: &Transaction) -> RepoResult<TransactionId>;
    fn delete(&self, id: TransactionId) -> RepoResult<()>;
    fn get(&self, id: TransactionId) -> RepoResult<Option<Transaction>>;
    fn list(&self) -> RepoResult<Vec<Transaction>>;
}

/// Session-local repository backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    rows: RefCell<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn insert(&self, transaction: &Transaction) -> RepoResult<TransactionId> {
        transaction.validate()?;
        let mut rows = self.rows.borrow_mut();
        if rows.iter().any(|row| row.id == transaction.id) {
            return Err(RepoError::DuplicateId(transaction.id));
        }
        rows.push(transaction.clone());
        Ok(transaction.id)
    }

    fn delete(&self, id: TransactionId) -> RepoResult<()> {
        let mut rows = self.rows.borrow_mut();
        let index = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RepoError::NotFound(id))?;
        rows.remove(index);
        Ok(())
    }

    fn get(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        Ok(self.rows.borrow().iter().find(|row| row.id == id).cloned())
    }

    fn list(&self) -> RepoResult<Vec<Transaction>> {
        Ok(self.rows.borrow().clone())
    }
}
