//! Core types and data structures for the bill tracking system

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recurring monthly bill
///
/// A bill is due once per calendar month on a fixed day-of-month. The
/// `paid` flag marks whether the current month's occurrence has already
/// been settled; it is reset externally at the start of each cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Display name of the bill, also used as its storage key
    pub name: String,
    /// Fixed day-of-month on which the bill recurs (1-31)
    pub due_day: u32,
    /// Amount in minor currency units (cents) to avoid floating-point error
    pub amount_cents: u32,
    /// Whether the bill has been paid for the current due cycle
    pub paid: bool,
    /// Additional metadata
    pub metadata: HashMap<String, String>,
    /// When the bill was created
    pub created_at: NaiveDateTime,
    /// When the bill was last updated
    pub updated_at: NaiveDateTime,
}

impl Bill {
    /// Create a new unpaid bill
    pub fn new(name: String, due_day: u32, amount_cents: u32) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            name,
            due_day,
            amount_cents,
            paid: false,
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the bill as paid for the current cycle
    pub fn mark_paid(&mut self) {
        self.paid = true;
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Mark the bill as unpaid, reopening the current cycle's occurrence
    pub fn mark_unpaid(&mut self) {
        self.paid = false;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// A bill paired with its computed days-until-due for one evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBill {
    /// The underlying bill
    pub bill: Bill,
    /// Calendar days from "today" to the bill's next payable occurrence
    pub days_until_due: u32,
}

/// Errors that can occur in the bill tracking system
#[derive(Debug, thiserror::Error)]
pub enum BillError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid calendar input: {0}")]
    InvalidCalendarInput(String),
    #[error("Bill not found: {0}")]
    BillNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for bill tracking operations
pub type BillResult<T> = Result<T, BillError>;
