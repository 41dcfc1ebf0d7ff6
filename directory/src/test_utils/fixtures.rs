//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid value that can be customized.

use chrono::NaiveDate;

use crate::app::dto::{PersonAddRequest, PersonResponse};
use crate::domain::entities::{Country, CountryId, Gender, NewPerson, Person, PersonId};

fn test_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 11, 18).unwrap()
}

fn test_email(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', "."))
}

/// Create a test country with default values
pub fn test_country() -> Country {
    test_country_named("Egypt")
}

/// Create a test country with a specific name
pub fn test_country_named(name: &str) -> Country {
    Country {
        id: CountryId::new(),
        name: name.to_string(),
    }
}

/// Create a valid add request for a person with a specific name
pub fn test_person_add_request(name: &str) -> PersonAddRequest {
    PersonAddRequest {
        name: Some(name.to_string()),
        email: Some(test_email(name)),
        date_of_birth: Some(test_date_of_birth()),
        gender: Some(Gender::Male),
        country_id: None,
        address: Some("123, Main Street, City - 12345".to_string()),
        receive_newsletters: true,
    }
}

/// Create a creation payload for a person with a specific name
pub fn test_new_person(name: &str) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        email: test_email(name),
        date_of_birth: test_date_of_birth(),
        gender: Gender::Male,
        country_id: None,
        address: Some("123, Main Street, City - 12345".to_string()),
        receive_newsletters: true,
    }
}

/// Create a stored person with a specific name
pub fn test_person_named(name: &str) -> Person {
    test_new_person(name).into_person(PersonId::new())
}

/// Create a response for a person with a specific name and no country
pub fn test_person_response(name: &str) -> PersonResponse {
    PersonResponse::from_person(&test_person_named(name), None)
}
