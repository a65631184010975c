//! Per-game sessions and the registry that hands out their locks.
//!
//! Each game owns its turn state, declarations, history and RNG behind its
//! own mutex. Two games never share any of these, so actions on different
//! games run in parallel while actions on one game are serialized.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{derive_game_seed, DeclarationState, GameId, HistoryLog, TurnState};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Mutable per-game state guarded by the game's lock.
#[derive(Debug)]
pub struct GameSession {
    pub game_id: GameId,
    pub turn: TurnState,
    pub declarations: DeclarationState,
    pub history: HistoryLog,
    pub rng: StdRng,
}

impl GameSession {
    pub fn new(game_id: GameId, rng: StdRng) -> Self {
        Self {
            game_id,
            turn: TurnState::default(),
            declarations: DeclarationState::new(),
            history: HistoryLog::new(),
            rng,
        }
    }
}

pub type SessionHandle = Arc<Mutex<GameSession>>;

/// Map from game id to that game's independently lockable session.
#[derive(Debug, Default)]
pub struct GameRegistry {
    sessions: DashMap<GameId, SessionHandle>,
    base_seed: Option<u64>,
}

impl GameRegistry {
    pub fn new(base_seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            base_seed,
        }
    }

    fn rng_for(&self, game_id: GameId) -> StdRng {
        match self.base_seed {
            Some(base) => StdRng::seed_from_u64(derive_game_seed(base, game_id)),
            None => StdRng::from_os_rng(),
        }
    }

    /// Register a fresh session for `game_id`, replacing any previous one.
    pub fn open(&self, game_id: GameId) -> SessionHandle {
        let handle = Arc::new(Mutex::new(GameSession::new(game_id, self.rng_for(game_id))));
        self.sessions.insert(game_id, Arc::clone(&handle));
        handle
    }

    pub fn get(&self, game_id: GameId) -> Result<SessionHandle, DomainError> {
        // Clone the Arc out so the map shard is not held while the game is locked
        self.sessions
            .get(&game_id)
            .map(|h| Arc::clone(h.value()))
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Game,
                    format!("No session for game {game_id}"),
                )
            })
    }

    pub fn remove(&self, game_id: GameId) -> bool {
        self.sessions.remove(&game_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Run `f` with exclusive access to the game's session.
    ///
    /// The guard is dropped when `f` returns, whether it succeeded or not.
    pub fn with_session<T>(
        &self,
        game_id: GameId,
        f: impl FnOnce(&mut GameSession) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let handle = self.get(game_id)?;
        let mut guard = handle.lock();
        f(&mut guard)
    }
}
