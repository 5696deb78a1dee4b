//! Shared building blocks for the kairos workspace: errors, settings, date
//! coercion and the rule option surface.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod options;
