//! Country domain entity
//!
//! A country a person can be associated with. Countries are created once and
//! never modified or removed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryId(pub Uuid);

impl CountryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero id, never assigned to a stored country
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for CountryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CountryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}

impl Country {
    /// Case-insensitive name comparison used for the uniqueness invariant
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Data needed to create a new country
#[derive(Debug, Clone)]
pub struct NewCountry {
    pub name: String,
}
