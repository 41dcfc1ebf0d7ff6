//! Unified error types for the person directory
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and store errors
//! - `AppError`: Service layer errors (wraps domain errors, adds input errors)
//! - `SeedError`: Seed file loading errors

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - returned by the services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Missing input: {0}")]
    MissingInput(String),
}

impl AppError {
    /// Message of the failing validation rule, if this is a validation error
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            AppError::Domain(DomainError::Validation(msg)) => Some(msg),
            _ => None,
        }
    }
}

/// Seed file errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Seeded person '{person}' references unknown country '{country}'")]
    UnknownCountry { person: String, country: String },

    #[error("{0}")]
    App(#[from] AppError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_into_app_error() {
        let err: AppError = DomainError::NotFound("Person 42".to_string()).into();

        assert!(matches!(err, AppError::Domain(DomainError::NotFound(_))));
        assert_eq!(err.to_string(), "Entity not found: Person 42");
    }

    #[test]
    fn validation_message_only_for_validation_errors() {
        let validation: AppError = DomainError::Validation("Email is required".to_string()).into();
        let missing = AppError::MissingInput("request".to_string());

        assert_eq!(validation.validation_message(), Some("Email is required"));
        assert_eq!(missing.validation_message(), None);
    }

    #[test]
    fn unknown_country_message_names_both_sides() {
        let err = SeedError::UnknownCountry {
            person: "John Doe".to_string(),
            country: "Atlantis".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("John Doe"));
        assert!(msg.contains("Atlantis"));
    }
}
