//! Ordered rank and suit vocabularies.
//!
//! A vocabulary is an ordered list of distinct tokens with O(1) token to
//! position lookup. Card construction, sorting and trick resolution all work
//! on positions; tokens only come back out for display.

use std::collections::HashMap;

use super::cards_types::{Card, Rank, Suit};
use super::rules::{STANDARD_RANKS, STANDARD_SUITS};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    positions: HashMap<String, u8>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting empty lists, duplicates and lists too
    /// long to index with a `u8`.
    pub fn new<I, S>(tokens: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(DomainError::InvalidVocabulary(
                "vocabulary must not be empty".into(),
            ));
        }

        let mut positions = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let pos = u8::try_from(i).map_err(|_| {
                DomainError::InvalidVocabulary(format!(
                    "vocabulary has {} tokens, at most 256 are supported",
                    tokens.len()
                ))
            })?;
            if positions.insert(token.clone(), pos).is_some() {
                return Err(DomainError::InvalidVocabulary(format!(
                    "duplicate token: {token}"
                )));
            }
        }

        Ok(Self { tokens, positions })
    }

    // Caller guarantees the list is short and duplicate-free.
    fn from_constants(tokens: &[&str]) -> Self {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let positions = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u8))
            .collect();
        Self { tokens, positions }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.positions.contains_key(token)
    }

    pub fn position(&self, token: &str) -> Option<usize> {
        self.positions.get(token).map(|&p| p as usize)
    }

    pub fn token(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// The pair of vocabularies a deck is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardVocabulary {
    ranks: Vocabulary,
    suits: Vocabulary,
}

impl CardVocabulary {
    pub fn new(ranks: Vocabulary, suits: Vocabulary) -> Self {
        Self { ranks, suits }
    }

    pub fn from_tokens<R, S>(ranks: &[R], suits: &[S]) -> Result<Self, DomainError>
    where
        R: AsRef<str>,
        S: AsRef<str>,
    {
        Ok(Self {
            ranks: Vocabulary::new(ranks.iter().map(|r| r.as_ref().to_string()))?,
            suits: Vocabulary::new(suits.iter().map(|s| s.as_ref().to_string()))?,
        })
    }

    /// Standard 52-card vocabulary.
    pub fn standard() -> Self {
        Self {
            ranks: Vocabulary::from_constants(&STANDARD_RANKS),
            suits: Vocabulary::from_constants(&STANDARD_SUITS),
        }
    }

    pub fn ranks(&self) -> &Vocabulary {
        &self.ranks
    }

    pub fn suits(&self) -> &Vocabulary {
        &self.suits
    }

    pub fn rank(&self, token: &str) -> Result<Rank, DomainError> {
        self.ranks
            .positions
            .get(token)
            .map(|&p| Rank::from_index(p))
            .ok_or_else(|| DomainError::InvalidRank(token.to_string()))
    }

    pub fn suit(&self, token: &str) -> Result<Suit, DomainError> {
        self.suits
            .positions
            .get(token)
            .map(|&p| Suit::from_index(p))
            .ok_or_else(|| DomainError::InvalidSuit(token.to_string()))
    }

    pub fn card(&self, rank: &str, suit: &str) -> Result<Card, DomainError> {
        Card::new(rank, suit, self)
    }

    /// Every rank in vocabulary order.
    pub fn all_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        (0..self.ranks.len()).map(|i| Rank::from_index(i as u8))
    }

    /// Every suit in vocabulary order.
    pub fn all_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        (0..self.suits.len()).map(|i| Suit::from_index(i as u8))
    }

    pub fn rank_token(&self, rank: Rank) -> &str {
        self.ranks.token(rank.index()).unwrap_or("?")
    }

    pub fn suit_token(&self, suit: Suit) -> &str {
        self.suits.token(suit.index()).unwrap_or("?")
    }

    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }
}
