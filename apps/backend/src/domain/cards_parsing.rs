//! Card text form: `"<color> <value>"`, e.g. "red 7", "blue skip", "wild wild".
//!
//! Parsing is case-insensitive; formatting is always lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Color, Face};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "wild" => Ok(Color::Wild),
            _ => Err(parse_err(s)),
        }
    }
}

impl FromStr for Face {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "skip" => Ok(Face::Skip),
            "reverse" => Ok(Face::Reverse),
            "draw-two" | "draw2" | "+2" => Ok(Face::DrawTwo),
            "wild" => Ok(Face::Wild),
            "wild-draw-four" | "draw4" | "+4" => Ok(Face::WildDrawFour),
            digits => match digits.parse::<u8>() {
                Ok(n) if n <= 9 && digits.len() == 1 => Ok(Face::Number(n)),
                _ => Err(parse_err(s)),
            },
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(color), Some(face), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err(s));
        };
        Ok(Card {
            color: color.parse().map_err(|_| parse_err(s))?,
            face: face.parse().map_err(|_| parse_err(s))?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Wild => "wild",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(n) => write!(f, "{n}"),
            Face::Skip => f.write_str("skip"),
            Face::Reverse => f.write_str("reverse"),
            Face::DrawTwo => f.write_str("draw-two"),
            Face::Wild => f.write_str("wild"),
            Face::WildDrawFour => f.write_str("wild-draw-four"),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.face)
    }
}

// Cards travel over the wire in their text form.
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
