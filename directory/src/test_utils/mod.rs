//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory adapters already cover the happy paths, so the mocks here
//! only simulate failing stores.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
