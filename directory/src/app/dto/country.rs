//! Country request/response types

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Country, CountryId, NewCountry};
use crate::error::DomainError;

/// Request body for adding a country
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: Some(country_name.into()),
        }
    }

    /// Convert into the creation payload, rejecting a missing or empty name
    pub fn to_new_country(&self) -> Result<NewCountry, DomainError> {
        match self.country_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(NewCountry {
                name: name.to_string(),
            }),
            _ => Err(DomainError::Validation(
                "Country name cannot be null or empty".to_string(),
            )),
        }
    }
}

/// Country as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryResponse {
    pub country_id: CountryId,
    pub country_name: String,
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        Self {
            country_id: country.id,
            country_name: country.name.clone(),
        }
    }
}
