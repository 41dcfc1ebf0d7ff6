//! Domain ports (traits)
//!
//! Port traits define the stores the services depend on.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{CountryRepository, PersonRepository};
