//! In-memory adapter for PersonRepository

use async_trait::async_trait;
use std::sync::RwLock;

use super::poisoned;
use crate::domain::entities::{NewPerson, Person, PersonId};
use crate::domain::ports::PersonRepository;
use crate::error::DomainError;

/// In-memory implementation of PersonRepository
#[derive(Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a person
    pub fn with_person(self, person: Person) -> Self {
        if let Ok(mut persons) = self.persons.write() {
            persons.push(person);
        }
        self
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        let persons = self.persons.read().map_err(poisoned)?;
        Ok(persons.clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        let persons = self.persons.read().map_err(poisoned)?;
        Ok(persons.iter().find(|p| p.id == *id).cloned())
    }

    async fn create(&self, new_person: &NewPerson) -> Result<Person, DomainError> {
        let person = new_person.clone().into_person(PersonId::new());

        let mut persons = self.persons.write().map_err(poisoned)?;
        persons.push(person.clone());

        Ok(person)
    }

    async fn update(&self, person: &Person) -> Result<Person, DomainError> {
        let mut persons = self.persons.write().map_err(poisoned)?;

        let existing = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Given person id {} does not exist", person.id))
            })?;

        existing.name = person.name.clone();
        existing.email = person.email.clone();
        existing.date_of_birth = person.date_of_birth;
        existing.gender = person.gender;
        existing.country_id = person.country_id;
        existing.address = person.address.clone();
        existing.receive_newsletters = person.receive_newsletters;

        Ok(existing.clone())
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError> {
        let mut persons = self.persons.write().map_err(poisoned)?;

        match persons.iter().position(|p| p.id == *id) {
            Some(index) => {
                persons.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
