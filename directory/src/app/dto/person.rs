//! Person request/response types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::app::validation::{Rules, Validate};
use crate::domain::entities::{CountryId, Gender, NewPerson, Person, PersonId};
use crate::error::DomainError;

const NAME_REQUIRED: &str = "Person name is required";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Invalid email address";
const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required";
const GENDER_REQUIRED: &str = "Gender is required";

fn person_rules(
    name: Option<&str>,
    email: Option<&str>,
    date_of_birth: Option<&NaiveDate>,
    gender: Option<&Gender>,
) -> Rules {
    Rules::new()
        .required_text(name, NAME_REQUIRED)
        .required_text(email, EMAIL_REQUIRED)
        .email(email, EMAIL_INVALID)
        .required(date_of_birth, DATE_OF_BIRTH_REQUIRED)
        .required(gender, GENDER_REQUIRED)
}

fn field<T: Clone>(value: &Option<T>, message: &str) -> Result<T, DomainError> {
    value
        .clone()
        .ok_or_else(|| DomainError::Validation(message.to_string()))
}

/// Request body for adding a person
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonAddRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_newsletters: bool,
}

impl Validate for PersonAddRequest {
    fn validate(&self) -> Result<(), DomainError> {
        person_rules(
            self.name.as_deref(),
            self.email.as_deref(),
            self.date_of_birth.as_ref(),
            self.gender.as_ref(),
        )
        .finish()
    }
}

impl PersonAddRequest {
    /// Validate and convert into the creation payload
    pub fn to_new_person(&self) -> Result<NewPerson, DomainError> {
        self.validate()?;

        Ok(NewPerson {
            name: field(&self.name, NAME_REQUIRED)?,
            email: field(&self.email, EMAIL_REQUIRED)?,
            date_of_birth: field(&self.date_of_birth, DATE_OF_BIRTH_REQUIRED)?,
            gender: field(&self.gender, GENDER_REQUIRED)?,
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletters: self.receive_newsletters,
        })
    }
}

/// Request body for updating an existing person
#[derive(Debug, Clone, Deserialize)]
pub struct PersonUpdateRequest {
    pub person_id: PersonId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_newsletters: bool,
}

impl Validate for PersonUpdateRequest {
    fn validate(&self) -> Result<(), DomainError> {
        person_rules(
            self.name.as_deref(),
            self.email.as_deref(),
            self.date_of_birth.as_ref(),
            self.gender.as_ref(),
        )
        .finish()
    }
}

impl PersonUpdateRequest {
    /// Validate and convert into the full entity that replaces the stored one
    pub fn to_person(&self) -> Result<Person, DomainError> {
        self.validate()?;

        Ok(Person {
            id: self.person_id,
            name: field(&self.name, NAME_REQUIRED)?,
            email: field(&self.email, EMAIL_REQUIRED)?,
            date_of_birth: field(&self.date_of_birth, DATE_OF_BIRTH_REQUIRED)?,
            gender: field(&self.gender, GENDER_REQUIRED)?,
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletters: self.receive_newsletters,
        })
    }
}

/// Person as returned by the service
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub person_id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub country_id: Option<CountryId>,
    /// Resolved from `country_id` when the response is built
    pub country_name: Option<String>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
    /// Years, one decimal place
    pub age: Option<f64>,
}

impl PersonResponse {
    pub fn from_person(person: &Person, country_name: Option<String>) -> Self {
        Self {
            person_id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            date_of_birth: person.date_of_birth,
            gender: person.gender,
            country_id: person.country_id,
            country_name,
            address: person.address.clone(),
            receive_newsletters: person.receive_newsletters,
            age: Some(age_on(person.date_of_birth, Utc::now().date_naive())),
        }
    }

    /// Pre-filled update request for editing this person
    pub fn to_person_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            date_of_birth: Some(self.date_of_birth),
            gender: Some(self.gender),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletters: self.receive_newsletters,
        }
    }
}

// Derived fields (age, country name) are left out of equality.
impl PartialEq for PersonResponse {
    fn eq(&self, other: &Self) -> bool {
        self.person_id == other.person_id
            && self.name == other.name
            && self.email == other.email
            && self.date_of_birth == other.date_of_birth
            && self.gender == other.gender
            && self.country_id == other.country_id
            && self.address == other.address
            && self.receive_newsletters == other.receive_newsletters
    }
}

/// Age in years on `today`, rounded to one decimal place
///
/// Negative for a birth date after `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> f64 {
    let days = today.signed_duration_since(date_of_birth).num_days();
    (days as f64 / 365.25 * 10.0).round() / 10.0
}
