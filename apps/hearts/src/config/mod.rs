//! Engine configuration.

pub mod game;

pub use game::{CardTokens, ConfigError, GameConfig, ResolvedConfig};
