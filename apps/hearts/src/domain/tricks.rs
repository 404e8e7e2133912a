//! One round of play: every seated player adds exactly one card.

use serde::Serialize;

use super::cards_types::{Card, Suit};
use super::rotation::PlayerId;
use super::rules::{PENALTY_CARD_POINTS, PENALTY_SUIT_POINTS};
use crate::errors::domain::DomainError;

/// Which cards carry penalty points.
///
/// Either part may be absent so reduced test vocabularies without a penalty
/// suit or penalty card still score consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoringRules {
    pub penalty_suit: Option<Suit>,
    pub penalty_card: Option<Card>,
}

impl ScoringRules {
    pub fn is_penalty_card(&self, card: Card) -> bool {
        self.penalty_card == Some(card)
    }

    pub fn is_penalty_suit(&self, suit: Suit) -> bool {
        self.penalty_suit == Some(suit)
    }

    pub fn card_points(&self, card: Card) -> u32 {
        if self.is_penalty_card(card) {
            PENALTY_CARD_POINTS
        } else if self.is_penalty_suit(card.suit()) {
            PENALTY_SUIT_POINTS
        } else {
            0
        }
    }

    pub fn is_point_card(&self, card: Card) -> bool {
        self.card_points(card) > 0
    }
}

/// How a card entered the trick, for narrating play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayAction {
    Led,
    LedPenaltyCard,
    DroppedPenaltyCard,
    Sloughed,
    Painted,
    Followed,
}

impl PlayAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayAction::Led => "led",
            PlayAction::LedPenaltyCard => "led the penalty card",
            PlayAction::DroppedPenaltyCard => "dropped the penalty card",
            PlayAction::Sloughed => "sloughed",
            PlayAction::Painted => "painted",
            PlayAction::Followed => "followed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    /// 1-based position within the hand.
    number: u32,
    /// The card that must open the first trick of a hand.
    starting_card: Card,
    seats: usize,
    rules: ScoringRules,
    suit_led: Option<Suit>,
    /// Ordered plays (who, card); position is play order.
    plays: Vec<(PlayerId, Card)>,
}

impl Trick {
    pub fn new(number: u32, starting_card: Card, seats: usize, rules: ScoringRules) -> Self {
        Self {
            number,
            starting_card,
            seats,
            rules,
            suit_led: None,
            plays: Vec::with_capacity(seats),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn starting_card(&self) -> Card {
        self.starting_card
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn suit_led(&self) -> Option<Suit> {
        self.suit_led
    }

    pub fn plays(&self) -> &[(PlayerId, Card)] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// True for the opening trick of a hand.
    pub fn first(&self) -> bool {
        self.number == 1
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() >= self.seats
    }

    pub fn has_played(&self, player: PlayerId) -> bool {
        self.plays.iter().any(|&(p, _)| p == player)
    }

    /// Check `player` may still add a card, without changing the trick.
    pub fn ensure_accepts(&self, player: PlayerId) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::TrickComplete(self.number));
        }
        if self.has_played(player) {
            return Err(DomainError::DuplicatePlay(player));
        }
        Ok(())
    }

    /// Append a play. The first card fixes the led suit.
    pub fn add(&mut self, player: PlayerId, card: Card) -> Result<(), DomainError> {
        self.ensure_accepts(player)?;
        if self.plays.is_empty() {
            self.suit_led = Some(card.suit());
        }
        self.plays.push((player, card));
        Ok(())
    }

    /// Highest card of the led suit.
    pub fn winning_card(&self) -> Option<Card> {
        let lead = self.suit_led?;
        self.plays
            .iter()
            .map(|&(_, c)| c)
            .filter(|c| c.suit() == lead)
            .max_by_key(|c| c.rank())
    }

    pub fn winning_player(&self) -> Option<PlayerId> {
        let winner = self.winning_card()?;
        self.plays
            .iter()
            .find(|&&(_, c)| c == winner)
            .map(|&(p, _)| p)
    }

    pub fn points(&self) -> u32 {
        self.plays
            .iter()
            .map(|&(_, c)| self.rules.card_points(c))
            .sum()
    }

    /// Point-bearing cards, suit descending then rank ascending.
    pub fn point_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .plays
            .iter()
            .map(|&(_, c)| c)
            .filter(|&c| self.rules.is_point_card(c))
            .collect();
        cards.sort_by(|a, b| b.suit().cmp(&a.suit()).then(a.rank().cmp(&b.rank())));
        cards
    }

    /// Narrative label for a card already in this trick.
    pub fn action_for(&self, card: Card) -> Option<PlayAction> {
        let index = self.plays.iter().position(|&(_, c)| c == card)?;
        Some(classify_play(index, card, self.suit_led, &self.rules))
    }
}

/// Classify a play from its position, the card and the led suit.
pub fn classify_play(
    index: usize,
    card: Card,
    suit_led: Option<Suit>,
    rules: &ScoringRules,
) -> PlayAction {
    let penalty_card = rules.is_penalty_card(card);
    let leading = index == 0;
    let on_suit = suit_led == Some(card.suit());

    if leading && penalty_card {
        PlayAction::LedPenaltyCard
    } else if penalty_card {
        PlayAction::DroppedPenaltyCard
    } else if leading {
        PlayAction::Led
    } else if !on_suit && !rules.is_penalty_suit(card.suit()) {
        PlayAction::Sloughed
    } else if !on_suit {
        PlayAction::Painted
    } else {
        PlayAction::Followed
    }
}
