//! RNG seed derivation for deterministic per-game shuffling.
//!
//! A single configured base seed fans out into one seed per game, so games
//! never share a generator and replaying a game id reproduces its draws.

use crate::domain::GameId;

/// Derive the seed for one game's generator.
///
/// Same base + game id = same seed; different game ids never collide for a
/// fixed base.
pub fn derive_game_seed(base_seed: u64, game_id: GameId) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let id = game_id as u64;

    // SplitMix64 finalizer over the combined value
    let mut z = base_seed.wrapping_add(id.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
