//! Person Directory
//!
//! In-memory directory of countries and the persons living in them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;

#[cfg(test)]
mod test_utils;


pub use adapters::{InMemoryCountryRepository, InMemoryPersonRepository};
pub use app::{
    CountriesService, CountryAddRequest, CountryResponse, PersonAddRequest, PersonField,
    PersonResponse, PersonService, PersonUpdateRequest, SortOrder,
};
pub use config::Config;
pub use domain::entities::{Country, CountryId, Gender, Person, PersonId};
pub use error::{AppError, DomainError, SeedError};
pub use seed::{Seed, SeedSummary};
