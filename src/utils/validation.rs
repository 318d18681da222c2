//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Validate that a bill name is valid
pub fn validate_bill_name(name: &str) -> BillResult<()> {
    if name.trim().is_empty() {
        return Err(BillError::Validation(
            "Bill name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(BillError::Validation(
            "Bill name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a due day lies within the calendar bounds
pub fn validate_due_day(due_day: u32) -> BillResult<()> {
    if !(1..=31).contains(&due_day) {
        return Err(BillError::Validation(format!(
            "Due day must be between 1 and 31, got {}",
            due_day
        )));
    }

    Ok(())
}

/// Enhanced bill validator with detailed checks
pub struct EnhancedBillValidator;

impl BillValidator for EnhancedBillValidator {
    fn validate_bill(&self, bill: &Bill) -> BillResult<()> {
        validate_bill_name(&bill.name)?;
        validate_due_day(bill.due_day)?;

        // Whitespace-padded names would break lookup by name.
        if bill.name != bill.name.trim() {
            return Err(BillError::Validation(format!(
                "Bill name '{}' has leading or trailing whitespace",
                bill.name
            )));
        }

        Ok(())
    }

    fn validate_bill_removal(&self, _name: &str) -> BillResult<()> {
        Ok(())
    }
}
