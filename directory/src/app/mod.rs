//! Application layer
//!
//! Contains the services and the request/response types they speak.
//! Services coordinate between domain entities and the store ports.

pub mod country_service;
pub mod dto;
pub mod person_query;
pub mod person_service;
pub mod validation;

pub use country_service::CountriesService;
pub use dto::{
    CountryAddRequest, CountryResponse, PersonAddRequest, PersonResponse, PersonUpdateRequest,
};
pub use person_query::{PersonField, SortOrder};
pub use person_service::PersonService;
pub use validation::Validate;
