//! In-memory adapter for CountryRepository

use async_trait::async_trait;
use std::sync::RwLock;

use super::poisoned;
use crate::domain::entities::{Country, CountryId, NewCountry};
use crate::domain::ports::CountryRepository;
use crate::error::DomainError;

/// In-memory implementation of CountryRepository
#[derive(Default)]
pub struct InMemoryCountryRepository {
    countries: RwLock<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a country
    pub fn with_country(self, country: Country) -> Self {
        if let Ok(mut countries) = self.countries.write() {
            countries.push(country);
        }
        self
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        let countries = self.countries.read().map_err(poisoned)?;
        Ok(countries.clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let countries = self.countries.read().map_err(poisoned)?;
        Ok(countries.iter().find(|c| c.id == *id).cloned())
    }

    async fn create(&self, new_country: &NewCountry) -> Result<Country, DomainError> {
        let mut countries = self.countries.write().map_err(poisoned)?;

        // Checked under the write lock so the uniqueness invariant holds
        if countries.iter().any(|c| c.has_name(&new_country.name)) {
            return Err(DomainError::AlreadyExists(format!(
                "Country with name {} already exists",
                new_country.name
            )));
        }

        let country = Country {
            id: CountryId::new(),
            name: new_country.name.clone(),
        };
        countries.push(country.clone());

        Ok(country)
    }
}
