//! Person service
//!
//! Handles person CRUD plus search and ordering. Every response carries the
//! country name resolved from the country store at the time it is built.

use std::sync::Arc;

use crate::app::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::app::person_query::{filter_persons, sort_persons, PersonField, SortOrder};
use crate::domain::entities::{Country, CountryId, Person, PersonId};
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::AppError;

/// Service for managing persons
pub struct PersonService<PR, CR>
where
    PR: PersonRepository,
    CR: CountryRepository,
{
    persons: Arc<PR>,
    countries: Arc<CR>,
}

impl<PR, CR> PersonService<PR, CR>
where
    PR: PersonRepository,
    CR: CountryRepository,
{
    pub fn new(persons: Arc<PR>, countries: Arc<CR>) -> Self {
        Self { persons, countries }
    }

    /// Add a new person
    ///
    /// The request is validated before anything is stored; the first failing
    /// rule is returned as a validation error.
    pub async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, AppError> {
        let request = request
            .ok_or_else(|| AppError::MissingInput("PersonAddRequest cannot be null".to_string()))?;

        let new_person = request.to_new_person()?;
        let person = self.persons.create(&new_person).await?;
        tracing::debug!(person_id = %person.id, name = %person.name, "Added person");

        self.to_response(&person).await
    }

    /// All persons in insertion order
    pub async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, AppError> {
        let persons = self.persons.find_all().await?;
        let countries = self.countries.find_all().await?;

        Ok(persons
            .iter()
            .map(|p| PersonResponse::from_person(p, country_name_in(&countries, p.country_id)))
            .collect())
    }

    /// Find a person by ID
    ///
    /// A missing or unknown ID yields `None`.
    pub async fn get_person_by_person_id(
        &self,
        person_id: Option<PersonId>,
    ) -> Result<Option<PersonResponse>, AppError> {
        let Some(person_id) = person_id else {
            return Ok(None);
        };

        match self.persons.find_by_id(&person_id).await? {
            Some(person) => Ok(Some(self.to_response(&person).await?)),
            None => Ok(None),
        }
    }

    /// Persons whose `search_by` field contains `search_string`, ignoring case
    ///
    /// A missing or empty argument, or an unrecognized field, returns everyone.
    pub async fn get_filtered_persons(
        &self,
        search_by: Option<&str>,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, AppError> {
        let all = self.get_all_persons().await?;

        let (Some(search_by), Some(search_string)) = (search_by, search_string) else {
            return Ok(all);
        };
        if search_by.is_empty() || search_string.is_empty() {
            return Ok(all);
        }

        match PersonField::parse(search_by) {
            Some(field) => Ok(filter_persons(all, field, search_string)),
            None => {
                tracing::debug!(search_by, "Unrecognized search field, returning all persons");
                Ok(all)
            }
        }
    }

    /// Stable sort of `persons` by `sort_by`
    ///
    /// A missing field or order, or an unrecognized field, returns the input
    /// unchanged.
    pub fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: Option<&str>,
        sort_order: Option<SortOrder>,
    ) -> Vec<PersonResponse> {
        let (Some(sort_by), Some(sort_order)) = (sort_by, sort_order) else {
            return persons;
        };

        match PersonField::parse(sort_by) {
            Some(field) => sort_persons(persons, field, sort_order),
            None => persons,
        }
    }

    /// Overwrite every field of an existing person
    ///
    /// Validation runs first; an ID that matches nobody (including the nil
    /// ID) is a not-found error.
    pub async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, AppError> {
        let request = request.ok_or_else(|| {
            AppError::MissingInput("PersonUpdateRequest cannot be null".to_string())
        })?;

        let person = request.to_person()?;
        let updated = self.persons.update(&person).await?;
        tracing::debug!(person_id = %updated.id, "Updated person");

        self.to_response(&updated).await
    }

    /// Remove a person, returning whether one was removed
    pub async fn delete_person(&self, person_id: Option<PersonId>) -> Result<bool, AppError> {
        let Some(person_id) = person_id else {
            return Ok(false);
        };

        let deleted = self.persons.delete(&person_id).await?;
        if deleted {
            tracing::debug!(%person_id, "Deleted person");
        }

        Ok(deleted)
    }

    async fn to_response(&self, person: &Person) -> Result<PersonResponse, AppError> {
        let country_name = match person.country_id.filter(|id| !id.is_nil()) {
            Some(id) => self.countries.find_by_id(&id).await?.map(|c| c.name),
            None => None,
        };

        Ok(PersonResponse::from_person(person, country_name))
    }
}

fn country_name_in(countries: &[Country], country_id: Option<CountryId>) -> Option<String> {
    let country_id = country_id?;
    countries
        .iter()
        .find(|c| c.id == country_id)
        .map(|c| c.name.clone())
}
