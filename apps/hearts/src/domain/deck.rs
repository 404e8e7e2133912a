//! The deck a hand is dealt from.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::Card;
use super::vocabulary::CardVocabulary;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// One card per rank/suit combination, suit-major in vocabulary order.
    pub fn new(vocab: &CardVocabulary) -> Self {
        let mut cards = Vec::with_capacity(vocab.deck_size());
        for suit in vocab.all_suits() {
            for rank in vocab.all_ranks() {
                cards.push(Card::from_parts(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the card at the end of the deck.
    pub fn take(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }
}
