//! An automated seat: hand of cards, per-hand score sheet and the baseline
//! play policy.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use rand::seq::{index, IndexedRandom};
use rand::Rng;

use super::cards_logic::sort_cards;
use super::cards_types::{Card, Rank, Suit};
use super::rotation::PlayerId;
use super::rules::PASS_COUNT;
use super::tricks::Trick;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    /// Points taken in each completed hand, keyed by 1-based hand number.
    points_by_hand: BTreeMap<u32, u32>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            points_by_hand: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn receive_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.extend(cards);
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.has_card_with(card.rank(), card.suit())
    }

    pub fn has_card_with(&self, rank: Rank, suit: Suit) -> bool {
        self.hand
            .iter()
            .any(|c| c.rank() == rank && c.suit() == suit)
    }

    pub fn has_card_with_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit() == suit)
    }

    pub fn has_all_cards_of(&self, cards: &[Card]) -> bool {
        cards.iter().all(|&c| self.has_card(c))
    }

    pub fn has_any_cards_of(&self, cards: &[Card]) -> bool {
        cards.iter().any(|&c| self.has_card(c))
    }

    pub fn get_card_with(&self, rank: Rank, suit: Suit) -> Result<Card, DomainError> {
        self.hand
            .iter()
            .copied()
            .find(|c| c.rank() == rank && c.suit() == suit)
            .ok_or_else(|| DomainError::CardNotFound(Card::from_parts(rank, suit).into()))
    }

    /// Remove `card` from the hand.
    fn remove_card(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(DomainError::CardNotFound(card.into()))?;
        Ok(self.hand.remove(pos))
    }

    /// Hand three randomly chosen cards to `other`, returning them in draw order.
    pub fn pass_three_cards_to<R: Rng + ?Sized>(
        &mut self,
        other: &mut Player,
        rng: &mut R,
    ) -> Result<Vec<Card>, DomainError> {
        if self.hand.len() < PASS_COUNT {
            return Err(DomainError::InsufficientCards {
                needed: PASS_COUNT,
                available: self.hand.len(),
            });
        }

        let mut picks = index::sample(rng, self.hand.len(), PASS_COUNT).into_vec();
        let passed: Vec<Card> = picks.iter().map(|&i| self.hand[i]).collect();

        // Highest index first so earlier removals don't shift later ones.
        picks.sort_unstable_by(|a, b| b.cmp(a));
        for i in picks {
            self.hand.remove(i);
        }

        other.receive_cards(passed.iter().copied());
        Ok(passed)
    }

    pub fn sort_cards(&mut self) {
        sort_cards(&mut self.hand);
    }

    pub fn add_points(&mut self, points: u32, hand: u32) {
        self.points_by_hand.insert(hand, points);
    }

    pub fn points(&self, hand: u32) -> Result<u32, DomainError> {
        self.points_by_hand
            .get(&hand)
            .copied()
            .ok_or(DomainError::NoSuchHand(hand))
    }

    pub fn total_points(&self) -> u32 {
        self.points_by_hand.values().sum()
    }

    pub fn points_by_hand(&self) -> &BTreeMap<u32, u32> {
        &self.points_by_hand
    }

    /// Whether to go after every penalty point this hand. Always declines.
    pub fn should_shoot_the_moon() -> bool {
        false
    }

    /// Play one card from `seat` into `trick` and return it.
    ///
    /// The opening play of a hand must be the starting card. Otherwise the
    /// player follows the led suit with a uniformly random matching card, or
    /// dumps a uniformly random card when void.
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        seat: PlayerId,
        trick: &mut Trick,
        rng: &mut R,
    ) -> Result<Card, DomainError> {
        trick.ensure_accepts(seat)?;

        let card = if trick.first() && trick.is_empty() {
            trick.starting_card()
        } else {
            self.choose_card(trick.suit_led(), rng)?
        };

        let card = self.remove_card(card)?;
        trick.add(seat, card)?;
        Ok(card)
    }

    fn choose_card<R: Rng + ?Sized>(
        &self,
        suit_led: Option<Suit>,
        rng: &mut R,
    ) -> Result<Card, DomainError> {
        let following: Vec<Card> = match suit_led {
            Some(lead) => self
                .hand
                .iter()
                .copied()
                .filter(|c| c.suit() == lead)
                .collect(),
            None => Vec::new(),
        };
        let pool = if following.is_empty() {
            &self.hand[..]
        } else {
            &following[..]
        };

        pool.choose(rng)
            .copied()
            .ok_or(DomainError::InsufficientCards {
                needed: 1,
                available: 0,
            })
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Mutable access to two different seats at once.
pub fn pair_mut(
    players: &mut [Player],
    a: PlayerId,
    b: PlayerId,
) -> Result<(&mut Player, &mut Player), DomainError> {
    if a >= players.len() {
        return Err(DomainError::UnknownPlayer(a));
    }
    if b >= players.len() || a == b {
        return Err(DomainError::UnknownPlayer(b));
    }
    if a < b {
        let (left, right) = players.split_at_mut(b);
        Ok((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = players.split_at_mut(a);
        Ok((&mut right[0], &mut left[b]))
    }
}
