//! Core card-related types: Card, Color, Face

pub type GameId = i64;
pub type PlayerId = i64;
pub type CardId = i64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    /// Wildcard color: always legal to play.
    Wild,
}

impl Color {
    pub const SUITED: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Face {
    /// 0..=9
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Turn-order consequence of successfully playing a face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnEffect {
    None,
    Skip,
    Reverse,
}

impl Face {
    pub fn effect(self) -> TurnEffect {
        match self {
            Face::Skip => TurnEffect::Skip,
            Face::Reverse => TurnEffect::Reverse,
            Face::Number(_) | Face::DrawTwo | Face::Wild | Face::WildDrawFour => TurnEffect::None,
        }
    }
}

/// A card's printed identity. Several physical cards share one `Card`;
/// the store tells them apart by `CardId`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub color: Color,
    pub face: Face,
}

impl Card {
    pub const fn new(color: Color, face: Face) -> Self {
        Self { color, face }
    }

    pub fn is_wild(&self) -> bool {
        self.color == Color::Wild
    }
}
