//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the bill tracking system
///
/// This trait allows the bill tracking core to work with any storage
/// backend (PostgreSQL, SQLite, flat files, in-memory, etc.) by
/// implementing these methods.
///
/// Implementations must return bills from [`list_bills`](Self::list_bills)
/// in the order they were first saved: the urgency sort is stable and
/// falls back to that order when two bills are due the same number of
/// days out.
#[async_trait]
pub trait BillStorage: Send + Sync {
    /// Save a new bill to storage
    async fn save_bill(&mut self, bill: &Bill) -> BillResult<()>;

    /// Get a bill by name
    async fn get_bill(&self, name: &str) -> BillResult<Option<Bill>>;

    /// List all bills in insertion order
    async fn list_bills(&self) -> BillResult<Vec<Bill>>;

    /// Update an existing bill
    async fn update_bill(&mut self, bill: &Bill) -> BillResult<()>;

    /// Delete a bill
    async fn delete_bill(&mut self, name: &str) -> BillResult<()>;
}

/// Trait for implementing custom bill validation rules
pub trait BillValidator: Send + Sync {
    /// Validate a bill before saving
    fn validate_bill(&self, bill: &Bill) -> BillResult<()>;

    /// Validate bill removal
    fn validate_bill_removal(&self, name: &str) -> BillResult<()>;
}

/// Default bill validator with basic rules
pub struct DefaultBillValidator;

impl BillValidator for DefaultBillValidator {
    fn validate_bill(&self, bill: &Bill) -> BillResult<()> {
        if bill.name.trim().is_empty() {
            return Err(BillError::Validation(
                "Bill name cannot be empty".to_string(),
            ));
        }

        if bill.due_day < 1 || bill.due_day > 31 {
            return Err(BillError::Validation(format!(
                "Due day must be between 1 and 31, got {}",
                bill.due_day
            )));
        }

        Ok(())
    }

    fn validate_bill_removal(&self, _name: &str) -> BillResult<()> {
        Ok(())
    }
}
