//! Hand scoring and winner selection.

use std::collections::BTreeMap;

use super::cards_types::Card;
use super::player::Player;
use super::rotation::PlayerId;
use super::rules::MOON_POINTS;
use super::tricks::Trick;
use crate::errors::domain::DomainError;

/// Tricks taken in one hand, grouped by the seat that won them.
pub type TricksByPlayer = BTreeMap<PlayerId, Vec<Trick>>;

pub fn raw_points(tricks: &[Trick]) -> u32 {
    tricks.iter().map(Trick::points).sum()
}

/// Points charged for a set of tricks. When someone shot the moon the
/// shooter's 26 become 0 and every other player takes 26 extra.
pub fn get_points_for(tricks: &[Trick], shot_the_moon: bool) -> u32 {
    let points = raw_points(tricks);
    if !shot_the_moon {
        points
    } else if points < MOON_POINTS {
        points + MOON_POINTS
    } else {
        0
    }
}

pub fn shot_the_moon(tricks_by_player: &TricksByPlayer) -> bool {
    tricks_by_player
        .values()
        .any(|tricks| raw_points(tricks) == MOON_POINTS)
}

/// Point cards across `tricks`, suit then rank ascending.
pub fn get_point_cards_for(tricks: &[Trick]) -> Vec<Card> {
    let mut cards: Vec<Card> = tricks.iter().flat_map(Trick::point_cards).collect();
    cards.sort();
    cards
}

/// Winner of `hand`: the zero-scorer after a moon shot, otherwise the first
/// player with the fewest points.
pub fn get_hand_winner(
    players: &[Player],
    hand: u32,
    shot_the_moon: bool,
) -> Result<Option<&Player>, DomainError> {
    let mut best: Option<(&Player, u32)> = None;
    for player in players {
        let points = player.points(hand)?;
        if shot_the_moon {
            if points == 0 {
                return Ok(Some(player));
            }
            continue;
        }
        let lower = match best {
            Some((_, low)) => points < low,
            None => true,
        };
        if lower {
            best = Some((player, points));
        }
    }
    Ok(best.map(|(p, _)| p))
}

/// Lowest cumulative total wins; ties go to the earlier seat.
pub fn get_game_winner(players: &[Player]) -> Option<&Player> {
    players.iter().min_by_key(|p| p.total_points())
}

pub fn get_players_sorted_by_total_points(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|p| p.total_points());
    sorted
}

pub fn sort_player_cards(players: &mut [Player]) {
    players.iter_mut().for_each(Player::sort_cards);
}
