//! Seed data
//!
//! Loads countries and persons from a JSON file and feeds them through the
//! services, so every validation rule and invariant applies to seeded data.
//!
//! ```json
//! {
//!   "countries": ["Egypt", "Germany"],
//!   "persons": [
//!     { "name": "Omar", "email": "omar@example.com", "date_of_birth": "1990-04-02",
//!       "gender": "Male", "country": "egypt" }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::app::{CountriesService, CountryAddRequest, PersonAddRequest, PersonService};
use crate::domain::entities::Gender;
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::SeedError;

#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub persons: Vec<SeedPerson>,
}

/// A person entry; `country` is a country name, matched ignoring case
#[derive(Debug, Deserialize)]
pub struct SeedPerson {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_newsletters: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub countries: usize,
    pub persons: usize,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self, SeedError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Add every country, then every person
    ///
    /// Stops at the first failure; entries added before it stay in place.
    pub async fn apply<PR, CR>(
        &self,
        countries: &CountriesService<CR>,
        persons: &PersonService<PR, CR>,
    ) -> Result<SeedSummary, SeedError>
    where
        PR: PersonRepository,
        CR: CountryRepository,
    {
        let mut summary = SeedSummary::default();

        for name in &self.countries {
            countries
                .add_country(Some(CountryAddRequest::new(name.as_str())))
                .await?;
            summary.countries += 1;
        }

        let known = countries.get_all_countries().await?;

        for entry in &self.persons {
            let country_id = match &entry.country {
                Some(country) => {
                    let wanted = country.to_lowercase();
                    let found = known
                        .iter()
                        .find(|c| c.country_name.to_lowercase() == wanted)
                        .ok_or_else(|| SeedError::UnknownCountry {
                            person: entry.name.clone().unwrap_or_default(),
                            country: country.clone(),
                        })?;
                    Some(found.country_id)
                }
                None => None,
            };

            let request = PersonAddRequest {
                name: entry.name.clone(),
                email: entry.email.clone(),
                date_of_birth: entry.date_of_birth,
                gender: entry.gender,
                country_id,
                address: entry.address.clone(),
                receive_newsletters: entry.receive_newsletters,
            };
            persons.add_person(Some(request)).await?;
            summary.persons += 1;
        }

        tracing::info!(
            countries = summary.countries,
            persons = summary.persons,
            "Seed applied"
        );

        Ok(summary)
    }
}
