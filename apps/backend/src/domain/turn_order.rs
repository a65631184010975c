//! Per-game turn order: seating, current-turn pointer, reversal parity and
//! pending skip.
//!
//! One `TurnState` exists per game and lives inside that game's session, so
//! reversals and skips in one game can never leak into another.

use crate::domain::state::Direction;
use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Seating order.
    seats: Vec<PlayerId>,
    /// Index into `seats` of the player to act. `None` until seeded.
    current: Option<usize>,
    /// Even = forward, odd = reversed.
    reversals: u32,
    pending_skip: bool,
}

impl TurnState {
    pub fn new(seats: Vec<PlayerId>) -> Self {
        Self {
            seats,
            ..Self::default()
        }
    }

    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }

    pub fn seated_count(&self) -> usize {
        self.seats.len()
    }

    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.current.map(|i| self.seats[i])
    }

    pub fn reversals(&self) -> u32 {
        self.reversals
    }

    pub fn direction(&self) -> Direction {
        Direction::from_parity(self.reversals)
    }

    pub fn pending_skip(&self) -> bool {
        self.pending_skip
    }

    /// Append a player to the seating. Returns false if already seated.
    pub fn seat(&mut self, player: PlayerId) -> bool {
        if self.is_seated(player) {
            return false;
        }
        self.seats.push(player);
        true
    }

    /// Remove a player, keeping the turn pointer on a seated player.
    ///
    /// When the player to act leaves, the turn passes to whoever would have
    /// followed them in the current direction.
    pub fn unseat(&mut self, player: PlayerId) -> bool {
        let Some(pos) = self.seats.iter().position(|&p| p == player) else {
            return false;
        };
        self.seats.remove(pos);

        let len = self.seats.len();
        if len == 0 {
            self.current = None;
            self.pending_skip = false;
            return true;
        }

        if let Some(cur) = self.current {
            let next = if pos < cur {
                cur - 1
            } else if pos > cur {
                cur
            } else {
                match self.direction() {
                    Direction::Forward => cur % len,
                    Direction::Reversed => (cur + len - 1) % len,
                }
            };
            self.current = Some(next);
        }
        true
    }

    /// Toggle effective direction for every later step.
    pub fn activate_reverse(&mut self) {
        self.reversals = self.reversals.wrapping_add(1);
    }

    /// The next `advance` steps twice.
    pub fn activate_skip(&mut self) {
        self.pending_skip = true;
    }

    /// Point the turn at `owner`. Any pending skip is consumed.
    pub fn seed(&mut self, owner: PlayerId) -> Result<PlayerId, DomainError> {
        let idx = self.index_of(owner)?;
        self.current = Some(idx);
        self.pending_skip = false;
        Ok(owner)
    }

    /// Seed to `owner` only if the pointer is not initialized yet.
    pub fn seed_if_unset(&mut self, owner: PlayerId) -> Result<PlayerId, DomainError> {
        match self.current_player() {
            Some(p) => Ok(p),
            None => self.seed(owner),
        }
    }

    /// Move the pointer one seat in the current direction (two if a skip is
    /// pending). From an unseeded state the pointer lands on `owner` instead.
    pub fn advance(&mut self, owner: PlayerId) -> Result<PlayerId, DomainError> {
        if self.seats.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::PlayerNotSeated,
                "No players are seated",
            ));
        }

        let Some(cur) = self.current else {
            return self.seed(owner);
        };

        let mut next = self.step(cur);
        if self.pending_skip {
            next = self.step(next);
            self.pending_skip = false;
        }
        self.current = Some(next);
        Ok(self.seats[next])
    }

    /// Player who would act after `advance`, without mutating.
    pub fn peek_next(&self, owner: PlayerId) -> Result<PlayerId, DomainError> {
        let mut ahead = self.clone();
        ahead.advance(owner)
    }

    fn step(&self, idx: usize) -> usize {
        let n = self.seats.len();
        match self.direction() {
            Direction::Forward => (idx + 1) % n,
            Direction::Reversed => (idx + n - 1) % n,
        }
    }

    fn index_of(&self, player: PlayerId) -> Result<usize, DomainError> {
        self.seats
            .iter()
            .position(|&p| p == player)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PlayerNotSeated,
                    format!("Player {player} is not seated in this game"),
                )
            })
    }
}
