pub mod path_ids;
pub mod validated_json;

pub use path_ids::{GameIdParam, PlayerIdParam, ScoreIdParam};
pub use validated_json::ValidatedJson;
