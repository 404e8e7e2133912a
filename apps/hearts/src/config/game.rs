//! Game configuration: player names, vocabularies, starting and penalty
//! cards, and the point threshold.
//!
//! Configuration is an immutable value handed to [`Game`](crate::domain::game::Game).
//! It starts from the standard Hearts defaults, can be loaded from JSON, and
//! is resolved into typed domain values by [`GameConfig::resolve`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::rules::{
    DEFAULT_MAX_POINTS, MIN_PLAYERS, PASS_COUNT, STANDARD_PENALTY_CARD_SUIT,
    STANDARD_PENALTY_RANK, STANDARD_PENALTY_SUIT, STANDARD_PLAYER_NAMES, STANDARD_RANKS,
    STANDARD_STARTING_RANK, STANDARD_STARTING_SUIT, STANDARD_SUITS,
};
use crate::domain::tricks::ScoringRules;
use crate::domain::vocabulary::CardVocabulary;
use crate::domain::Deck;
use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A card named by its vocabulary tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTokens {
    pub rank: String,
    pub suit: String,
}

impl CardTokens {
    pub fn new(rank: impl Into<String>, suit: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    fn resolve(&self, vocab: &CardVocabulary) -> Result<Card, DomainError> {
        Card::new(&self.rank, &self.suit, vocab)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seating order before the game shuffles it.
    pub player_names: Vec<String>,
    /// Suit tokens, lowest first.
    pub suits: Vec<String>,
    /// Rank tokens, lowest first.
    pub ranks: Vec<String>,
    /// Card that opens the first trick of every hand.
    pub starting_card: CardTokens,
    /// Suit whose cards are worth one point each.
    pub penalty_suit: Option<String>,
    /// Single card worth thirteen points.
    pub penalty_card: Option<CardTokens>,
    /// The game ends once any player's total reaches this.
    pub max_points: u32,
    /// RNG seed; `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// Four players, 52 cards, two of clubs leads, hearts and the queen of
    /// spades score, game to 100.
    pub fn standard() -> Self {
        Self {
            player_names: STANDARD_PLAYER_NAMES.iter().map(|s| s.to_string()).collect(),
            suits: STANDARD_SUITS.iter().map(|s| s.to_string()).collect(),
            ranks: STANDARD_RANKS.iter().map(|s| s.to_string()).collect(),
            starting_card: CardTokens::new(STANDARD_STARTING_RANK, STANDARD_STARTING_SUIT),
            penalty_suit: Some(STANDARD_PENALTY_SUIT.to_string()),
            penalty_card: Some(CardTokens::new(
                STANDARD_PENALTY_RANK,
                STANDARD_PENALTY_CARD_SUIT,
            )),
            max_points: DEFAULT_MAX_POINTS,
            seed: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file. Missing fields fall back to the standard game.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn card_vocabulary(&self) -> Result<CardVocabulary, DomainError> {
        CardVocabulary::from_tokens(&self.ranks, &self.suits)
    }

    pub fn scoring_rules(&self, vocab: &CardVocabulary) -> Result<ScoringRules, DomainError> {
        let penalty_suit = self
            .penalty_suit
            .as_deref()
            .map(|s| vocab.suit(s))
            .transpose()?;
        let penalty_card = self
            .penalty_card
            .as_ref()
            .map(|c| c.resolve(vocab))
            .transpose()?;
        Ok(ScoringRules {
            penalty_suit,
            penalty_card,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate every field and turn tokens into typed domain values.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.player_names.len() < MIN_PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "at least {MIN_PLAYERS} players are required, got {}",
                self.player_names.len()
            )));
        }
        let mut seen = HashSet::new();
        for name in &self.player_names {
            if !seen.insert(name.as_str()) {
                return Err(DomainError::DuplicatePlayer(name.clone()).into());
            }
        }
        if self.max_points == 0 {
            return Err(ConfigError::Invalid("max_points must be positive".into()));
        }

        let vocab = self.card_vocabulary()?;
        let starting_card = self.starting_card.resolve(&vocab)?;
        let rules = self.scoring_rules(&vocab)?;
        if let (Some(card), Some(suit)) = (rules.penalty_card, rules.penalty_suit) {
            if card.suit() == suit {
                return Err(ConfigError::Invalid(
                    "penalty card must lie outside the penalty suit".into(),
                ));
            }
        }

        let deck = Deck::new(&vocab);
        let penalty_points: u32 = deck.cards().iter().map(|&c| rules.card_points(c)).sum();
        if penalty_points == 0 {
            return Err(ConfigError::Invalid(
                "deck carries no penalty points, the game could never end".into(),
            ));
        }

        let players = self.player_names.len();
        if deck.count() % players != 0 {
            return Err(DomainError::UnevenDeal {
                cards: deck.count(),
                players,
            }
            .into());
        }
        if deck.count() / players < PASS_COUNT {
            return Err(ConfigError::Invalid(format!(
                "each player needs at least {PASS_COUNT} cards to pass, deal gives {}",
                deck.count() / players
            )));
        }

        Ok(ResolvedConfig {
            player_names: self.player_names.clone(),
            vocab,
            starting_card,
            rules,
            max_points: self.max_points,
            seed: self.seed,
        })
    }
}

/// A validated configuration with tokens resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub player_names: Vec<String>,
    pub vocab: CardVocabulary,
    pub starting_card: Card,
    pub rules: ScoringRules,
    pub max_points: u32,
    pub seed: Option<u64>,
}
