//! Schedule module containing the recurrence engine and bill management

pub mod bill;
pub mod core;
pub mod recurrence;

pub use bill::*;
pub use core::*;
pub use recurrence::*;
