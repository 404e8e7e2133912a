//! Pre-trick card passing.
//!
//! The direction cycles with the hand number: left, right, across, keep.
//! Passes are made one after another along the walk, so a player may pass
//! on cards received earlier in the same phase.

use serde::Serialize;

use super::cards_types::Card;
use super::rotation::{seat_offset, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassDirection {
    Left,
    Right,
    Across,
    Keep,
}

impl PassDirection {
    pub fn for_hand(hand: u32) -> Self {
        match hand % 4 {
            1 => PassDirection::Left,
            2 => PassDirection::Right,
            3 => PassDirection::Across,
            _ => PassDirection::Keep,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PassDirection::Left => "Left / Clockwise",
            PassDirection::Right => "Right / Counter-Clockwise",
            PassDirection::Across => "Across",
            PassDirection::Keep => "None / Keep",
        }
    }

    /// Steps along the walk between passer and receiver.
    fn distance(self) -> usize {
        match self {
            PassDirection::Left | PassDirection::Right => 1,
            PassDirection::Across => 2,
            PassDirection::Keep => 0,
        }
    }

    /// Seats in the order they pass. Right walks the table backwards from seat 0.
    pub fn walk(self, seats: usize) -> Vec<PlayerId> {
        let step: isize = if self == PassDirection::Right { -1 } else { 1 };
        (0..seats)
            .map(|i| seat_offset(0, step * i as isize, seats))
            .collect()
    }

    /// (passer, receiver) pairs in passing order. Empty when keeping.
    ///
    /// A pair that would pass to itself (across at a two-seat table) is dropped.
    pub fn pairs(self, seats: usize) -> Vec<(PlayerId, PlayerId)> {
        if self == PassDirection::Keep || seats == 0 {
            return Vec::new();
        }
        let walk = self.walk(seats);
        (0..seats)
            .map(|i| (walk[i], walk[(i + self.distance()) % seats]))
            .filter(|(from, to)| from != to)
            .collect()
    }
}

pub fn get_three_card_pass_type_description(hand: u32) -> &'static str {
    PassDirection::for_hand(hand).description()
}

/// Cards one player handed to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPass {
    pub from: PlayerId,
    pub to: PlayerId,
    pub cards: Vec<Card>,
}
