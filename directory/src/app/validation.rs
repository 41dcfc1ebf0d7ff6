//! Request validation rules
//!
//! Each request type lists its rules explicitly through [`Rules`]. Rules run in
//! the order they are added and only the first failure is reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

/// Implemented by request types that must be checked before mutation
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// Ordered rule list that stops at the first failure
#[derive(Debug, Default)]
pub struct Rules {
    failure: Option<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be present
    pub fn required<T>(self, value: Option<&T>, message: &str) -> Self {
        self.check(value.is_some(), message)
    }

    /// Text must be present and not blank
    pub fn required_text(self, value: Option<&str>, message: &str) -> Self {
        self.check(value.is_some_and(|v| !v.trim().is_empty()), message)
    }

    /// Text, when present, must look like an email address
    pub fn email(self, value: Option<&str>, message: &str) -> Self {
        self.check(value.map_or(true, is_email), message)
    }

    pub fn finish(self) -> Result<(), DomainError> {
        match self.failure {
            Some(message) => Err(DomainError::Validation(message)),
            None => Ok(()),
        }
    }

    fn check(mut self, passed: bool, message: &str) -> Self {
        if self.failure.is_none() && !passed {
            self.failure = Some(message.to_string());
        }
        self
    }
}

/// Exactly one `@` with something on both sides, no whitespace anywhere
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rules_pass() {
        assert!(Rules::new().finish().is_ok());
    }

    #[test]
    fn required_text_rejects_missing_and_blank() {
        for value in [None, Some(""), Some("   ")] {
            let result = Rules::new().required_text(value, "Name is required").finish();
            assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "Name is required"));
        }

        assert!(Rules::new().required_text(Some("John"), "x").finish().is_ok());
    }

    #[test]
    fn required_checks_presence_only() {
        assert!(Rules::new().required(Some(&0), "x").finish().is_ok());
        assert!(Rules::new().required::<i32>(None, "x").finish().is_err());
    }

    #[test]
    fn email_rule_skips_missing_value() {
        assert!(Rules::new().email(None, "Invalid email").finish().is_ok());
    }

    #[test]
    fn email_pattern() {
        assert!(is_email("joe@example.com"));
        assert!(is_email("JOE@EXAMPLE.COM"));
        assert!(is_email("a@b"));
        assert!(!is_email("joe"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("joe@"));
        assert!(!is_email("joe@@example.com"));
        assert!(!is_email("joe @example.com"));
        assert!(!is_email("  joe@example.com  "));
    }

    #[test]
    fn first_failure_wins() {
        let result = Rules::new()
            .required_text(Some("John"), "Person name is required")
            .required_text(Some("not-an-email"), "Email is required")
            .email(Some("not-an-email"), "Invalid email address")
            .required::<u8>(None, "Date of birth is required")
            .finish();

        match result {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "Invalid email address"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
