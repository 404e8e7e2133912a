#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Hearts rules engine: cards and vocabularies, the trick state machine,
//! card passing, scoring and whole-game orchestration.

pub mod config;
pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{CardTokens, ConfigError, GameConfig, ResolvedConfig};
pub use domain::game::Game;
pub use domain::report::{GameReport, HandReport};
pub use errors::domain::{CardName, DomainError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
