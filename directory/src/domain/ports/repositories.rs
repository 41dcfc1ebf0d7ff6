//! Repository port traits
//!
//! These traits define the interface for the country and person stores.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{Country, CountryId, NewCountry, NewPerson, Person, PersonId};
use crate::error::DomainError;

/// Repository for Country entities
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// List all countries in insertion order
    async fn find_all(&self) -> Result<Vec<Country>, DomainError>;

    /// Find a country by ID
    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError>;

    /// Create a new country
    ///
    /// Fails with `AlreadyExists` when the name is taken (case-insensitive).
    async fn create(&self, country: &NewCountry) -> Result<Country, DomainError>;
}

/// Repository for Person entities
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List all persons in insertion order
    async fn find_all(&self) -> Result<Vec<Person>, DomainError>;

    /// Find a person by ID
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError>;

    /// Create a new person with a freshly assigned ID
    async fn create(&self, person: &NewPerson) -> Result<Person, DomainError>;

    /// Overwrite every field but the ID of an existing person
    ///
    /// Fails with `NotFound` when no person has `person.id`.
    async fn update(&self, person: &Person) -> Result<Person, DomainError>;

    /// Remove a person, returning whether one was removed
    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError>;
}
