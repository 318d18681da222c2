//! Due-date recurrence engine
//!
//! Computes how many days remain until each bill is next payable and
//! orders bills by urgency. All functions here are pure: "today" is an
//! explicit parameter, never read from the system clock, so every
//! computation is deterministic and repeatable.

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

use crate::types::*;

/// Calendar facts for one evaluation pass
///
/// Holds today's day-of-month and the length of the current month. A
/// context is captured once per pass and shared by every bill in it, so
/// all bills are ordered against the same "today" even if the pass runs
/// across a day boundary.
///
/// Constructed values are always valid: [`CalendarContext::new`] rejects
/// out-of-range input and [`CalendarContext::for_date`] derives both
/// fields from a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarContext {
    today_day: u32,
    month_length: u32,
}

impl CalendarContext {
    /// Create a context from explicit day-of-month and month length
    ///
    /// Returns [`BillError::InvalidCalendarInput`] when `month_length` is
    /// not a real month length (28-31) or `today_day` does not fall
    /// within the month.
    pub fn new(today_day: u32, month_length: u32) -> BillResult<Self> {
        if !(28..=31).contains(&month_length) {
            return Err(BillError::InvalidCalendarInput(format!(
                "month length must be between 28 and 31, got {}",
                month_length
            )));
        }

        if today_day < 1 || today_day > month_length {
            return Err(BillError::InvalidCalendarInput(format!(
                "day of month must be between 1 and {}, got {}",
                month_length, today_day
            )));
        }

        Ok(Self {
            today_day,
            month_length,
        })
    }

    /// Derive a context from a calendar date
    pub fn for_date(date: NaiveDate) -> Self {
        let month_length = match date.month() {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if date.leap_year() {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        };

        Self {
            today_day: date.day(),
            month_length,
        }
    }

    /// Today's day-of-month (1-31)
    pub fn today_day(&self) -> u32 {
        self.today_day
    }

    /// Number of days in the current month (28-31)
    pub fn month_length(&self) -> u32 {
        self.month_length
    }
}

/// Compute the number of days until a bill is next payable
///
/// Zero means the bill is due today and unpaid. A bill whose due day has
/// already passed this month rolls over to next month; a bill already
/// paid this cycle skips its current occurrence and reports next
/// month's. Both rollovers reuse the current month's length as a proxy
/// for the next month's.
///
/// Returns [`BillError::InvalidCalendarInput`] when the bill's due day
/// does not exist in the current month (e.g. day 31 in a 30-day month).
pub fn days_until_due(ctx: &CalendarContext, bill: &Bill) -> BillResult<u32> {
    if bill.due_day < 1 || bill.due_day > ctx.month_length() {
        return Err(BillError::InvalidCalendarInput(format!(
            "bill '{}' has due day {} outside the current month (1-{})",
            bill.name,
            bill.due_day,
            ctx.month_length()
        )));
    }

    // Due day already passed this month: next occurrence is next month.
    if bill.due_day < ctx.today_day() {
        return Ok((ctx.month_length() - ctx.today_day()) + bill.due_day);
    }

    // Due today or later this month.
    let remaining = bill.due_day - ctx.today_day();

    // Already paid this cycle: the current occurrence is settled, so the
    // next relevant one is a full month out.
    if bill.paid {
        Ok(remaining + ctx.month_length())
    } else {
        Ok(remaining)
    }
}

/// Compare two bills by urgency (soonest due first)
///
/// Equal days-until-due compare as [`Ordering::Equal`]; there is no
/// secondary key. Callers that sort with this comparator must use a
/// stable sort so ties keep their input order.
pub fn compare(ctx: &CalendarContext, a: &Bill, b: &Bill) -> BillResult<Ordering> {
    let days_a = days_until_due(ctx, a)?;
    let days_b = days_until_due(ctx, b)?;
    Ok(days_a.cmp(&days_b))
}

/// Order a collection of bills by urgency
///
/// Computes days-until-due for every bill against the same context, then
/// stable-sorts ascending so bills due the same number of days out keep
/// their input order. Fails without producing a partial result if any
/// bill's due day is invalid for the current month.
pub fn schedule_bills(ctx: &CalendarContext, bills: &[Bill]) -> BillResult<Vec<ScheduledBill>> {
    let mut scheduled = Vec::with_capacity(bills.len());
    for bill in bills {
        let days = days_until_due(ctx, bill)?;
        scheduled.push(ScheduledBill {
            bill: bill.clone(),
            days_until_due: days,
        });
    }

    scheduled.sort_by_key(|s| s.days_until_due);
    Ok(scheduled)
}

/// Sum the amounts of a collection of bills
///
/// The accumulator is wide enough that realistic bill counts and
/// amounts cannot overflow it.
pub fn total_amount(bills: &[Bill]) -> u64 {
    bills.iter().map(|b| u64::from(b.amount_cents)).sum()
}
