//! Append-only turn history for audit and replay display.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// 1-based position in the log.
    pub seq: u64,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// Entries are only ever appended; there is no API to edit or remove one.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>) -> &HistoryEntry {
        let seq = self.entries.len() as u64 + 1;
        self.entries.push(HistoryEntry {
            seq,
            text: text.into(),
            at: OffsetDateTime::now_utc(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn played(player: &str, card: Card) -> String {
    format!("{player} played {card}")
}

pub fn drew(player: &str, cards: &[Card]) -> String {
    format!("{player} drew {}", join_cards(cards))
}

pub fn penalty(player: &str, cards: &[Card]) -> String {
    format!("{player} drew {} as a challenge penalty", join_cards(cards))
}

pub fn declared(player: &str) -> String {
    format!("{player} declared last card")
}

pub fn won(player: &str) -> String {
    format!("{player} won the game")
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
