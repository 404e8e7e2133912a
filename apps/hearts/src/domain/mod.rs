//! Domain layer: cards, tricks, players and the game loop.

pub mod cards_logic;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod passing;
pub mod player;
pub mod report;
pub mod rotation;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod tricks;
pub mod vocabulary;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_player;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::sort_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use passing::{CardPass, PassDirection};
pub use player::Player;
pub use rotation::{cycle_players_to, PlayerId, Rotation};
pub use rules::ordinal;
pub use seed_derivation::{derive_game_seed, require_seed_32, seed_from_u64};
pub use tricks::{PlayAction, ScoringRules, Trick};
pub use vocabulary::{CardVocabulary, Vocabulary};
