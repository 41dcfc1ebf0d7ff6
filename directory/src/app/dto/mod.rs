//! Request and response types
//!
//! Requests are what callers send to the services; responses are the
//! read-only projections the services hand back.

pub mod country;
pub mod person;

pub use country::{CountryAddRequest, CountryResponse};
pub use person::{age_on, PersonAddRequest, PersonResponse, PersonUpdateRequest};
