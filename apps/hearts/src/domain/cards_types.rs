//! Core card-related types: Card, Rank, Suit
//!
//! Ranks and suits are positions inside the configured vocabularies rather
//! than a fixed enum, so the same engine runs a 52-card deck or a reduced
//! test deck. Use [`CardVocabulary`](super::vocabulary::CardVocabulary) to
//! build them from tokens and to turn them back into tokens for display.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::vocabulary::CardVocabulary;
use crate::errors::domain::DomainError;

/// Position of a suit token within the suit vocabulary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Suit(u8);

impl Suit {
    pub(crate) const fn from_index(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a rank token within the rank vocabulary (higher wins).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    pub(crate) const fn from_index(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Build a card from rank and suit tokens, validating both against `vocab`.
    pub fn new(rank: &str, suit: &str, vocab: &CardVocabulary) -> Result<Self, DomainError> {
        let suit = vocab.suit(suit)?;
        let rank = vocab.rank(rank)?;
        Ok(Self { suit, rank })
    }

    /// Build a card from already-validated parts.
    pub const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

// Note: Ord on Card is only for stable display sorting: suit position, then
// rank position. Trick resolution goes through the led suit, not this order.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "rank #{} of suit #{}", self.rank.0, self.suit.0)
    }
}
