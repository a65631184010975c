//! Collaborator interfaces the engine depends on.
//!
//! The engine never talks to storage directly; it goes through these traits
//! so any backing store (the in-memory adapters, or a test double) fits.

pub mod cards;
pub mod games;
pub mod players;
pub mod scores;

pub use cards::{CardRecord, CardStore, Holder};
pub use games::{Game, GameCreate, GameDirectory};
pub use players::{Player, PlayerDirectory};
pub use scores::{ScoreEntry, ScoreStore};
