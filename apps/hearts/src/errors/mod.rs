//! Error handling for the Hearts engine.

pub mod domain;

pub use domain::{CardName, DomainError};
