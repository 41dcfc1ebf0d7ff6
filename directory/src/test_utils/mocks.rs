//! Mock implementations of port traits
//!
//! Stores that fail every call, for checking that errors reach the caller.

use async_trait::async_trait;

use crate::domain::entities::{Country, CountryId, NewCountry, NewPerson, Person, PersonId};
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::DomainError;

fn unavailable() -> DomainError {
    DomainError::Internal("store unavailable".to_string())
}

// ============================================================================
// Failing Country Repository
// ============================================================================

pub struct FailingCountryRepository;

#[async_trait]
impl CountryRepository for FailingCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &CountryId) -> Result<Option<Country>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _country: &NewCountry) -> Result<Country, DomainError> {
        Err(unavailable())
    }
}

// ============================================================================
// Failing Person Repository
// ============================================================================

pub struct FailingPersonRepository;

#[async_trait]
impl PersonRepository for FailingPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &PersonId) -> Result<Option<Person>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _person: &NewPerson) -> Result<Person, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _person: &Person) -> Result<Person, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &PersonId) -> Result<bool, DomainError> {
        Err(unavailable())
    }
}
