//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for countries and persons
//! - `ports`: Trait definitions for the stores

pub mod entities;
pub mod ports;
