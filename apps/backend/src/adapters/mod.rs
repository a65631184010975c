//! Adapters for the collaborator interfaces.
//!
//! The shipped backing store is in-memory: each entity lives in a `DashMap`
//! keyed by id, with ids handed out by atomic counters.

pub mod cards_mem;
pub mod games_mem;
pub mod players_mem;
pub mod scores_mem;

pub use cards_mem::MemoryCardStore;
pub use games_mem::MemoryGameDirectory;
pub use players_mem::MemoryPlayerDirectory;
pub use scores_mem::MemoryScoreStore;
