//! Core types shared by the mftf-semver facilities
//!
//! - **Correlation types**: RunId identifying one comparison run in logs
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
