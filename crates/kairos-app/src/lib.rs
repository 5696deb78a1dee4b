//! Listing of configured schedules for the `kairos` binary.

pub mod error;
pub mod listing;
