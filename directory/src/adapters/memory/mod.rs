//! In-memory adapters
//!
//! Insertion-ordered implementations of the repository traits. Lookups are
//! linear scans over a `Vec` guarded by an `RwLock`.

pub mod country_repo;
pub mod person_repo;

pub use country_repo::InMemoryCountryRepository;
pub use person_repo::InMemoryPersonRepository;

use crate::error::DomainError;

fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::Internal("store lock poisoned".to_string())
}
