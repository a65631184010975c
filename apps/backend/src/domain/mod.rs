//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod declaration;
pub mod history;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod turn_order;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_turn_order;

// Re-exports for ergonomics
pub use cards_logic::{is_playable, playable_cards};
pub use cards_types::{Card, CardId, Color, Face, GameId, PlayerId, TurnEffect};
pub use dealing::standard_deck;
pub use declaration::DeclarationState;
pub use history::{HistoryEntry, HistoryLog};
pub use seed_derivation::derive_game_seed;
pub use state::{Direction, GameStatus};
pub use turn_order::TurnState;
pub use validation::{validate_play, validate_turn, PlayContext};
