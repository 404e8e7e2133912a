//! Domain-level error type used across the rules engine.
//!
//! Every variant describes a local, deterministic condition raised by the
//! caller (bad vocabulary token, lookup miss, uneven deal, ...). Nothing here
//! is transient, so callers propagate these with `?` instead of retrying.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::rotation::PlayerId;
use crate::domain::vocabulary::CardVocabulary;

/// A card as it appears in an error.
///
/// Code without a vocabulary at hand raises `Position`; callers that own one
/// swap in the tokens with [`DomainError::name_cards`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardName {
    Position(Card),
    Tokens { rank: String, suit: String },
}

impl CardName {
    pub fn tokens(card: Card, vocab: &CardVocabulary) -> Self {
        CardName::Tokens {
            rank: vocab.rank_token(card.rank()).to_string(),
            suit: vocab.suit_token(card.suit()).to_string(),
        }
    }

    fn resolve(self, vocab: &CardVocabulary) -> Self {
        match self {
            CardName::Position(card) => CardName::tokens(card, vocab),
            named => named,
        }
    }
}

impl From<Card> for CardName {
    fn from(card: Card) -> Self {
        CardName::Position(card)
    }
}

impl Display for CardName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CardName::Position(card) => write!(f, "{card}"),
            CardName::Tokens { rank, suit } => write!(f, "{rank} of {suit}"),
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid card rank: {0}")]
    InvalidRank(String),
    #[error("invalid card suit: {0}")]
    InvalidSuit(String),
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("cannot take a card from an empty deck")]
    EmptyDeck,
    #[error("card not found: {0}")]
    CardNotFound(CardName),
    #[error("insufficient cards: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("no points recorded for hand {0}")]
    NoSuchHand(u32),
    #[error("ordinal is out of range: {0}")]
    OutOfRange(i64),
    #[error("cannot deal {cards} cards evenly to {players} players")]
    UnevenDeal { cards: usize, players: usize },
    #[error("no players are seated")]
    NoPlayers,
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),
    #[error("player {0} is not seated")]
    UnknownPlayer(PlayerId),
    #[error("player {0} already played to this trick")]
    DuplicatePlay(PlayerId),
    #[error("trick {0} already holds a card from every player")]
    TrickComplete(u32),
    #[error("no player holds the starting card {0}")]
    StartingCardNotDealt(CardName),
    #[error("invalid seed: expected 32 bytes, got {0}")]
    InvalidSeed(usize),
}

impl DomainError {
    /// Stable machine-readable code for logs and simulator output.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidRank(_) => "INVALID_RANK",
            DomainError::InvalidSuit(_) => "INVALID_SUIT",
            DomainError::InvalidVocabulary(_) => "INVALID_VOCABULARY",
            DomainError::EmptyDeck => "EMPTY_DECK",
            DomainError::CardNotFound(_) => "CARD_NOT_FOUND",
            DomainError::InsufficientCards { .. } => "INSUFFICIENT_CARDS",
            DomainError::NoSuchHand(_) => "NO_SUCH_HAND",
            DomainError::OutOfRange(_) => "OUT_OF_RANGE",
            DomainError::UnevenDeal { .. } => "UNEVEN_DEAL",
            DomainError::NoPlayers => "NO_PLAYERS",
            DomainError::DuplicatePlayer(_) => "DUPLICATE_PLAYER",
            DomainError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            DomainError::DuplicatePlay(_) => "DUPLICATE_PLAY",
            DomainError::TrickComplete(_) => "TRICK_COMPLETE",
            DomainError::StartingCardNotDealt(_) => "STARTING_CARD_NOT_DEALT",
            DomainError::InvalidSeed(_) => "INVALID_SEED",
        }
    }

    /// Replace card positions with their tokens from `vocab`.
    pub fn name_cards(self, vocab: &CardVocabulary) -> Self {
        match self {
            DomainError::CardNotFound(name) => DomainError::CardNotFound(name.resolve(vocab)),
            DomainError::StartingCardNotDealt(name) => {
                DomainError::StartingCardNotDealt(name.resolve(vocab))
            }
            other => other,
        }
    }
}
