//! Reduced-vocabulary fixtures: three suits of four ranks, four players.

pub const TEST_PLAYER_NAMES: [&str; 4] = [
    "Test Player 1",
    "Test Player 2",
    "Test Player 3",
    "Test Player 4",
];
pub const TEST_SUITS: [&str; 3] = ["Suit A", "Suit B", "Suit C"];
pub const TEST_RANKS: [&str; 4] = ["Rank 1", "Rank 2", "Rank 3", "Rank 4"];

pub const TEST_STARTING_RANK: &str = "Rank 1";
pub const TEST_STARTING_SUIT: &str = "Suit A";
pub const TEST_PENALTY_SUIT: &str = "Suit C";
pub const TEST_PENALTY_RANK: &str = "Rank 3";
pub const TEST_PENALTY_CARD_SUIT: &str = "Suit B";

pub const TEST_CARD_COUNT: usize = TEST_SUITS.len() * TEST_RANKS.len();

pub fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
