//! Shared test tooling for the hearts workspace.
//!
//! Integration tests pull logging initialisation and the reduced card
//! vocabulary from here so every suite sets up the same way.

pub mod fixtures;
pub mod logging;
