//! Seat and turn math.
//!
//! Seats are positions in the game's seating order (`0..seats`). Turn order
//! is a modular cursor over those positions, so "advance until player X" is a
//! direct index computation instead of an open-ended loop.

use crate::errors::domain::DomainError;

pub type PlayerId = usize;

/// Seat `delta` places away from `seat`, wrapping around the table.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: isize, seats: usize) -> PlayerId {
    if seats == 0 {
        return 0;
    }
    (seat as isize + delta).rem_euclid(seats as isize) as PlayerId
}

/// Next seat clockwise.
#[inline]
pub fn next_seat(seat: PlayerId, seats: usize) -> PlayerId {
    seat_offset(seat, 1, seats)
}

/// Round-robin turn pointer.
///
/// `next_player` hands out the seat under the cursor and moves past it, so a
/// fresh rotation yields `0, 1, .., seats - 1, 0, ..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    seats: usize,
    cursor: PlayerId,
}

impl Rotation {
    pub fn new(seats: usize) -> Self {
        Self { seats, cursor: 0 }
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Back to the first seat.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Seat the next call to `next_player` will return.
    pub fn peek(&self) -> Option<PlayerId> {
        (self.seats > 0).then_some(self.cursor)
    }

    pub fn next_player(&mut self) -> Result<PlayerId, DomainError> {
        if self.seats == 0 {
            return Err(DomainError::NoPlayers);
        }
        let current = self.cursor;
        self.cursor = next_seat(current, self.seats);
        Ok(current)
    }

    /// Advance until `target` has been handed out and return it. The
    /// following `next_player` yields the seat after `target`.
    pub fn cycle_to(&mut self, target: PlayerId) -> Result<PlayerId, DomainError> {
        if self.seats == 0 {
            return Err(DomainError::NoPlayers);
        }
        if target >= self.seats {
            return Err(DomainError::UnknownPlayer(target));
        }
        self.cursor = next_seat(target, self.seats);
        Ok(target)
    }

    /// Seats in turn order starting at `leader`.
    pub fn order_from(&self, leader: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.seats).map(move |step| seat_offset(leader, step as isize, self.seats))
    }
}

/// Point `rotation` at `target`, returning it.
pub fn cycle_players_to(
    target: PlayerId,
    rotation: &mut Rotation,
) -> Result<PlayerId, DomainError> {
    rotation.cycle_to(target)
}
