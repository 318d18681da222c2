//! Bill management functionality

use tracing::debug;

use crate::traits::*;
use crate::types::*;

/// Bill manager for handling bill collection operations
pub struct BillManager<S: BillStorage> {
    pub(crate) storage: S,
    validator: Box<dyn BillValidator>,
}

impl<S: BillStorage> BillManager<S> {
    /// Create a new bill manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultBillValidator),
        }
    }

    /// Create a new bill manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn BillValidator>) -> Self {
        Self { storage, validator }
    }

    /// Add a new bill
    pub async fn add_bill(
        &mut self,
        name: String,
        due_day: u32,
        amount_cents: u32,
    ) -> BillResult<Bill> {
        let bill = Bill::new(name, due_day, amount_cents);

        // Validate the bill
        self.validator.validate_bill(&bill)?;

        // Check if a bill with this name already exists
        if let Some(_existing) = self.storage.get_bill(&bill.name).await? {
            return Err(BillError::Validation(format!(
                "Bill named '{}' already exists",
                bill.name
            )));
        }

        self.storage.save_bill(&bill).await?;
        debug!(name = %bill.name, due_day = bill.due_day, amount_cents = bill.amount_cents, "added bill");

        Ok(bill)
    }

    /// Get a bill by name
    pub async fn get_bill(&self, name: &str) -> BillResult<Option<Bill>> {
        self.storage.get_bill(name).await
    }

    /// Get a bill by name, returning an error if not found
    pub async fn get_bill_required(&self, name: &str) -> BillResult<Bill> {
        self.storage
            .get_bill(name)
            .await?
            .ok_or_else(|| BillError::BillNotFound(name.to_string()))
    }

    /// List all bills in insertion order
    pub async fn list_bills(&self) -> BillResult<Vec<Bill>> {
        self.storage.list_bills().await
    }

    /// Update a bill
    pub async fn update_bill(&mut self, bill: &Bill) -> BillResult<()> {
        self.validator.validate_bill(bill)?;

        if self.storage.get_bill(&bill.name).await?.is_none() {
            return Err(BillError::BillNotFound(bill.name.clone()));
        }

        self.storage.update_bill(bill).await
    }

    /// Remove a bill
    pub async fn remove_bill(&mut self, name: &str) -> BillResult<()> {
        self.validator.validate_bill_removal(name)?;

        if self.storage.get_bill(name).await?.is_none() {
            return Err(BillError::BillNotFound(name.to_string()));
        }

        self.storage.delete_bill(name).await
    }

    /// Mark a bill as paid for the current cycle
    pub async fn mark_paid(&mut self, name: &str) -> BillResult<Bill> {
        let mut bill = self.get_bill_required(name).await?;
        bill.mark_paid();
        self.storage.update_bill(&bill).await?;
        debug!(name = %bill.name, "marked bill paid");
        Ok(bill)
    }

    /// Mark a bill as unpaid, reopening the current cycle's occurrence
    pub async fn mark_unpaid(&mut self, name: &str) -> BillResult<Bill> {
        let mut bill = self.get_bill_required(name).await?;
        bill.mark_unpaid();
        self.storage.update_bill(&bill).await?;
        debug!(name = %bill.name, "marked bill unpaid");
        Ok(bill)
    }

    /// Mark every bill as unpaid
    ///
    /// Used at the start of a new billing cycle to reset all paid flags
    /// at once.
    pub async fn mark_all_unpaid(&mut self) -> BillResult<()> {
        for mut bill in self.storage.list_bills().await? {
            if bill.paid {
                bill.mark_unpaid();
                self.storage.update_bill(&bill).await?;
            }
        }
        debug!("reset paid flags for all bills");
        Ok(())
    }
}
