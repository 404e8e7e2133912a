use crate::errors::domain::DomainError;

/// Cumulative total at which the game ends.
pub const DEFAULT_MAX_POINTS: u32 = 100;
/// Penalty points available in a standard hand; taking all of them shoots the moon.
pub const MOON_POINTS: u32 = 26;
pub const PENALTY_CARD_POINTS: u32 = 13;
pub const PENALTY_SUIT_POINTS: u32 = 1;
/// Cards each player hands over during the passing phase.
pub const PASS_COUNT: usize = 3;
pub const MIN_PLAYERS: usize = 2;

pub const STANDARD_SUITS: [&str; 4] = ["clubs", "diamonds", "spades", "hearts"];
pub const STANDARD_RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];
pub const STANDARD_PLAYER_NAMES: [&str; 4] = ["Bob", "Alice", "John", "Sandy"];
pub const STANDARD_STARTING_RANK: &str = "2";
pub const STANDARD_STARTING_SUIT: &str = "clubs";
pub const STANDARD_PENALTY_SUIT: &str = "hearts";
pub const STANDARD_PENALTY_RANK: &str = "Q";
pub const STANDARD_PENALTY_CARD_SUIT: &str = "spades";

const ORDINALS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];

/// Finishing-place label for 1..=4.
pub fn ordinal(n: i64) -> Result<&'static str, DomainError> {
    if !(1..=ORDINALS.len() as i64).contains(&n) {
        return Err(DomainError::OutOfRange(n));
    }
    Ok(ORDINALS[(n - 1) as usize])
}
