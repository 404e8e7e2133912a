//! RNG seed helpers for reproducible games.
//!
//! Games run on a `ChaCha8Rng` seeded with 32 bytes. A short numeric seed
//! fills the first eight bytes; batch runs derive one seed per game from a
//! base seed so every game differs but the whole batch replays.

use crate::errors::domain::DomainError;

pub const SEED_LEN: usize = 32;

/// Spread a `u64` over a 32-byte seed: little-endian in the first 8 bytes,
/// zeros after.
pub fn seed_from_u64(seed: u64) -> [u8; SEED_LEN] {
    let mut out = [0u8; SEED_LEN];
    out[..8].copy_from_slice(&seed.to_le_bytes());
    out
}

/// Check that `bytes` is exactly one seed long.
pub fn require_seed_32(bytes: &[u8]) -> Result<[u8; SEED_LEN], DomainError> {
    <[u8; SEED_LEN]>::try_from(bytes).map_err(|_| DomainError::InvalidSeed(bytes.len()))
}

/// Seed for game `game_no` of a batch. Game 1 keeps the base seed as is.
pub fn derive_game_seed(base: &[u8; SEED_LEN], game_no: u32) -> [u8; SEED_LEN] {
    let mut out = *base;
    let mut head = [0u8; 8];
    head.copy_from_slice(&base[..8]);
    let mixed = u64::from_le_bytes(head)
        .wrapping_add(u64::from(game_no.saturating_sub(1)).wrapping_mul(1_000_003));
    out[..8].copy_from_slice(&mixed.to_le_bytes());
    out
}
