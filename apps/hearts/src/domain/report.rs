//! Serialisable record of a played game.
//!
//! Everything here is derived from engine state after the fact; cards are
//! rendered as their vocabulary tokens and players by name.

use serde::Serialize;

use super::cards_types::Card;
use super::passing::{CardPass, PassDirection};
use super::player::Player;
use super::tricks::{classify_play, PlayAction, Trick};
use super::vocabulary::CardVocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLabel {
    pub rank: String,
    pub suit: String,
}

impl CardLabel {
    pub fn new(card: Card, vocab: &CardVocabulary) -> Self {
        Self {
            rank: vocab.rank_token(card.rank()).to_string(),
            suit: vocab.suit_token(card.suit()).to_string(),
        }
    }

    pub fn many(cards: &[Card], vocab: &CardVocabulary) -> Vec<Self> {
        cards.iter().map(|&c| Self::new(c, vocab)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
    pub player: String,
    pub card: CardLabel,
    pub action: PlayAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    pub number: u32,
    pub plays: Vec<PlayRecord>,
    pub winner: String,
    pub points: u32,
    pub point_cards: Vec<CardLabel>,
}

impl TrickRecord {
    pub fn from_trick(trick: &Trick, players: &[Player], vocab: &CardVocabulary) -> Self {
        let plays = trick
            .plays()
            .iter()
            .enumerate()
            .map(|(index, &(seat, card))| PlayRecord {
                player: name_of(players, seat),
                card: CardLabel::new(card, vocab),
                action: classify_play(index, card, trick.suit_led(), trick.rules()),
            })
            .collect();
        Self {
            number: trick.number(),
            plays,
            winner: trick
                .winning_player()
                .map(|seat| name_of(players, seat))
                .unwrap_or_default(),
            points: trick.points(),
            point_cards: CardLabel::many(&trick.point_cards(), vocab),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassRecord {
    pub from: String,
    pub to: String,
    pub cards: Vec<CardLabel>,
}

impl PassRecord {
    pub fn from_pass(pass: &CardPass, players: &[Player], vocab: &CardVocabulary) -> Self {
        Self {
            from: name_of(players, pass.from),
            to: name_of(players, pass.to),
            cards: CardLabel::many(&pass.cards, vocab),
        }
    }
}

/// One player's result for a single hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandScore {
    pub player: String,
    pub points: u32,
    pub total_points: u32,
    pub point_cards: Vec<CardLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandReport {
    pub hand_number: u32,
    pub pass_direction: PassDirection,
    pub passes: Vec<PassRecord>,
    pub first_player: String,
    pub order_of_play: Vec<String>,
    pub tricks: Vec<TrickRecord>,
    pub shot_the_moon: bool,
    pub hand_winner: Option<String>,
    /// Ordered by cumulative total, lowest first.
    pub scores: Vec<HandScore>,
}

impl HandReport {
    pub fn points_for(&self, player: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.points)
    }

    pub fn trick_points(&self) -> u32 {
        self.tricks.iter().map(|t| t.points).sum()
    }

    pub fn hand_points(&self) -> u32 {
        self.scores.iter().map(|s| s.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub place: usize,
    pub player: String,
    pub total_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub seating: Vec<String>,
    pub max_points: u32,
    pub hands: Vec<HandReport>,
    pub standings: Vec<Standing>,
    pub winner: String,
}

impl GameReport {
    pub fn hands_played(&self) -> usize {
        self.hands.len()
    }

    pub fn moon_shots(&self) -> usize {
        self.hands.iter().filter(|h| h.shot_the_moon).count()
    }

    pub fn total_for(&self, player: &str) -> Option<u32> {
        self.standings
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.total_points)
    }

    /// Hands won by `player`.
    pub fn hand_wins(&self, player: &str) -> usize {
        self.hands
            .iter()
            .filter(|h| h.hand_winner.as_deref() == Some(player))
            .count()
    }
}

fn name_of(players: &[Player], seat: usize) -> String {
    players
        .get(seat)
        .map(|p| p.name().to_string())
        .unwrap_or_default()
}
