//! # Billtrack Core
//!
//! A bill tracking library for recurring monthly obligations, providing
//! due-date recurrence calculation, urgency ordering, and expense
//! summaries.
//!
//! ## Features
//!
//! - **Recurrence engine**: Computes days-until-due for bills with fixed
//!   monthly due days, accounting for month rollover and paid status
//! - **Urgency ordering**: Stable prioritization of bills by how soon
//!   they are next payable
//! - **Bill management**: Add, pay, unpay, and remove bills with
//!   pluggable validation
//! - **Bill list parsing**: Line-based `amount name due-day` source
//!   format with structured errors
//! - **Summary rendering**: Formatted monthly expense reports
//! - **Storage abstraction**: Database-agnostic design with trait-based
//!   storage
//!
//! ## Quick Start
//!
//! ```rust
//! use billtrack_core::{schedule_bills, total_amount, Bill, CalendarContext};
//!
//! let bills = vec![
//!     Bill::new("Rent".to_string(), 1, 132500),
//!     Bill::new("Car Payment".to_string(), 21, 26262),
//! ];
//!
//! let ctx = CalendarContext::new(21, 30)?;
//! let scheduled = schedule_bills(&ctx, &bills)?;
//!
//! assert_eq!(scheduled[0].bill.name, "Car Payment");
//! assert_eq!(scheduled[0].days_until_due, 0);
//! assert_eq!(total_amount(&bills), 158762);
//! # Ok::<(), billtrack_core::BillError>(())
//! ```

pub mod parse;
pub mod report;
pub mod schedule;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use parse::*;
pub use report::*;
pub use schedule::*;
pub use traits::*;
pub use types::*;
