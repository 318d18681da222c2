//! Main bill book orchestrator that coordinates storage and scheduling

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::recurrence::{self, CalendarContext};
use crate::schedule::BillManager;
use crate::traits::*;
use crate::types::*;

/// Main bill tracking system that orchestrates all bill operations
pub struct BillBook<S: BillStorage> {
    manager: BillManager<S>,
}

impl<S: BillStorage> BillBook<S> {
    /// Create a new bill book with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            manager: BillManager::new(storage),
        }
    }

    /// Create a new bill book with a custom validator
    pub fn with_validator(storage: S, validator: Box<dyn BillValidator>) -> Self {
        Self {
            manager: BillManager::with_validator(storage, validator),
        }
    }

    // Bill operations
    /// Add a new bill
    pub async fn add_bill(
        &mut self,
        name: String,
        due_day: u32,
        amount_cents: u32,
    ) -> BillResult<Bill> {
        self.manager.add_bill(name, due_day, amount_cents).await
    }

    /// Get a bill by name
    pub async fn get_bill(&self, name: &str) -> BillResult<Option<Bill>> {
        self.manager.get_bill(name).await
    }

    /// List all bills in insertion order
    pub async fn list_bills(&self) -> BillResult<Vec<Bill>> {
        self.manager.list_bills().await
    }

    /// Remove a bill
    pub async fn remove_bill(&mut self, name: &str) -> BillResult<()> {
        self.manager.remove_bill(name).await
    }

    /// Mark a bill as paid for the current cycle
    pub async fn mark_paid(&mut self, name: &str) -> BillResult<Bill> {
        self.manager.mark_paid(name).await
    }

    /// Mark a bill as unpaid
    pub async fn mark_unpaid(&mut self, name: &str) -> BillResult<Bill> {
        self.manager.mark_unpaid(name).await
    }

    /// Mark every bill as unpaid at the start of a new cycle
    pub async fn mark_all_unpaid(&mut self) -> BillResult<()> {
        self.manager.mark_all_unpaid().await
    }

    // Evaluation passes
    /// Produce a monthly summary as of the given date
    ///
    /// The date is supplied by the caller rather than read from the
    /// system clock, so passes are deterministic and testable.
    pub async fn monthly_summary(&self, today: NaiveDate) -> BillResult<MonthlySummary> {
        self.monthly_summary_with_context(CalendarContext::for_date(today))
            .await
    }

    /// Produce a monthly summary under an explicit calendar context
    ///
    /// The context is captured once and applied to every bill, so the
    /// resulting ordering is consistent even if the wall clock crosses a
    /// day boundary mid-pass.
    pub async fn monthly_summary_with_context(
        &self,
        ctx: CalendarContext,
    ) -> BillResult<MonthlySummary> {
        let bills = self.manager.list_bills().await?;
        let scheduled = recurrence::schedule_bills(&ctx, &bills)?;
        let total_cents = recurrence::total_amount(&bills);

        debug!(
            bills = scheduled.len(),
            total_cents,
            today_day = ctx.today_day(),
            "evaluated monthly summary"
        );

        Ok(MonthlySummary {
            today_day: ctx.today_day(),
            month_length: ctx.month_length(),
            bills: scheduled,
            total_cents,
        })
    }
}

/// Result of one full evaluation pass over the bill collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Day-of-month the pass was evaluated on
    pub today_day: u32,
    /// Length of the month the pass was evaluated in
    pub month_length: u32,
    /// All bills ordered by urgency (soonest due first)
    pub bills: Vec<ScheduledBill>,
    /// Total monthly expense across all bills, in cents
    pub total_cents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStorage;

    #[tokio::test]
    async fn test_bill_book_basic_operations() {
        let storage = MemoryStorage::new();
        let mut book = BillBook::new(storage);

        book.add_bill("Rent".to_string(), 1, 132500).await.unwrap();
        book.add_bill("Car Insurance".to_string(), 5, 32500)
            .await
            .unwrap();
        book.add_bill("Car Payment".to_string(), 21, 26262)
            .await
            .unwrap();

        let ctx = CalendarContext::new(21, 30).unwrap();
        let summary = book.monthly_summary_with_context(ctx).await.unwrap();

        assert_eq!(summary.total_cents, 132500 + 32500 + 26262);
        assert_eq!(summary.bills.len(), 3);

        // Due today sorts first, passed due days roll over to next month.
        assert_eq!(summary.bills[0].bill.name, "Car Payment");
        assert_eq!(summary.bills[0].days_until_due, 0);
        assert_eq!(summary.bills[1].bill.name, "Rent");
        assert_eq!(summary.bills[1].days_until_due, 10);
        assert_eq!(summary.bills[2].bill.name, "Car Insurance");
        assert_eq!(summary.bills[2].days_until_due, 14);
    }

    #[tokio::test]
    async fn test_paid_bill_deprioritized() {
        let storage = MemoryStorage::new();
        let mut book = BillBook::new(storage);

        book.add_bill("Electricity".to_string(), 15, 15000)
            .await
            .unwrap();
        book.add_bill("Internet".to_string(), 18, 8800)
            .await
            .unwrap();

        book.mark_paid("Electricity").await.unwrap();

        let ctx = CalendarContext::new(12, 31).unwrap();
        let summary = book.monthly_summary_with_context(ctx).await.unwrap();

        // Paid bill skips this month's occurrence: 3 + 31 = 34 days out.
        assert_eq!(summary.bills[0].bill.name, "Internet");
        assert_eq!(summary.bills[0].days_until_due, 6);
        assert_eq!(summary.bills[1].bill.name, "Electricity");
        assert_eq!(summary.bills[1].days_until_due, 34);
    }

    #[tokio::test]
    async fn test_summary_from_calendar_date() {
        let storage = MemoryStorage::new();
        let mut book = BillBook::new(storage);

        book.add_bill("Rent".to_string(), 1, 132500).await.unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 4, 21).unwrap();
        let summary = book.monthly_summary(today).await.unwrap();

        assert_eq!(summary.today_day, 21);
        assert_eq!(summary.month_length, 30);
        assert_eq!(summary.bills[0].days_until_due, (30 - 21) + 1);
    }

    #[tokio::test]
    async fn test_summary_fails_on_impossible_due_day() {
        let storage = MemoryStorage::new();
        let mut book = BillBook::new(storage);

        book.add_bill("Month-End".to_string(), 31, 5000)
            .await
            .unwrap();

        // Day 31 does not exist in a 30-day month.
        let ctx = CalendarContext::new(15, 30).unwrap();
        let err = book.monthly_summary_with_context(ctx).await;
        assert!(matches!(err, Err(BillError::InvalidCalendarInput(_))));
    }
}
