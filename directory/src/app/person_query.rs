//! Person filtering and sorting
//!
//! Filter and sort keys form a closed set, see [`PersonField`]. Unknown keys
//! leave the input untouched.

use chrono::NaiveDate;

use crate::app::dto::PersonResponse;

/// Rendering of a birth date for text search
const DATE_OF_BIRTH_FORMAT: &str = "%d/%m/%Y";

/// A person field that can be searched and sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Email,
    Gender,
    DateOfBirth,
    /// Matched and ordered by the resolved country name
    Country,
    Address,
}

impl PersonField {
    pub const ALL: [PersonField; 6] = [
        PersonField::Name,
        PersonField::Email,
        PersonField::Gender,
        PersonField::DateOfBirth,
        PersonField::Country,
        PersonField::Address,
    ];

    /// Parse a field key, `None` for unrecognized keys
    pub fn parse(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// Searchable text of this field
    fn text(&self, person: &PersonResponse) -> Option<String> {
        match self {
            PersonField::Name => Some(person.name.clone()),
            PersonField::Email => Some(person.email.clone()),
            PersonField::Gender => Some(person.gender.to_string()),
            PersonField::DateOfBirth => Some(
                person
                    .date_of_birth
                    .format(DATE_OF_BIRTH_FORMAT)
                    .to_string(),
            ),
            PersonField::Country => person.country_name.clone(),
            PersonField::Address => person.address.clone(),
        }
    }

    fn sort_key(&self, person: &PersonResponse) -> SortKey {
        match self {
            PersonField::DateOfBirth => SortKey::Date(person.date_of_birth),
            _ => SortKey::Text(self.text(person).map(|t| t.to_lowercase())),
        }
    }
}

impl std::fmt::Display for PersonField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonField::Name => write!(f, "name"),
            PersonField::Email => write!(f, "email"),
            PersonField::Gender => write!(f, "gender"),
            PersonField::DateOfBirth => write!(f, "birthDate"),
            PersonField::Country => write!(f, "countryId"),
            PersonField::Address => write!(f, "address"),
        }
    }
}

impl std::str::FromStr for PersonField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "PersonName" => Ok(PersonField::Name),
            "email" | "Email" => Ok(PersonField::Email),
            "gender" | "Gender" => Ok(PersonField::Gender),
            "birthDate" | "DateOfBirth" => Ok(PersonField::DateOfBirth),
            "countryId" | "CountryId" => Ok(PersonField::Country),
            "address" | "Address" => Ok(PersonField::Address),
            _ => Err(format!("Unknown person field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

// Absent values order before present ones.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(Option<String>),
    Date(NaiveDate),
}

/// Keep the persons whose `field` contains `search`, ignoring case
pub fn filter_persons(
    persons: Vec<PersonResponse>,
    field: PersonField,
    search: &str,
) -> Vec<PersonResponse> {
    let needle = search.to_lowercase();
    persons
        .into_iter()
        .filter(|p| {
            field
                .text(p)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by `field`
pub fn sort_persons(
    mut persons: Vec<PersonResponse>,
    field: PersonField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    persons.sort_by(|a, b| {
        let ordering = field.sort_key(a).cmp(&field.sort_key(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    persons
}
