//! Cell colors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A color that can occupy a board cell.
///
/// Five normal colors take part in matches. [`Color::Joker`] never matches on
/// its own, but is swept away when it touches a clearing group.
///
/// An empty cell has no color and is represented as `None` wherever a cell
/// state is stored (see [`Grid`](crate::Grid)).
///
/// # Examples
///
/// ```
/// use chainpaint_core::Color;
///
/// assert!(Color::Red.is_normal());
/// assert!(!Color::Joker.is_normal());
/// assert_eq!(Color::from_char('Y'), Some(Color::Yellow));
/// assert_eq!(Color::Purple.to_string(), "P");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// The joker marker.
    Joker,
}

impl Color {
    /// The five normal colors, in display order.
    pub const NORMAL: [Self; 5] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
    ];

    /// All colors, normal colors first.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Joker,
    ];

    /// Returns `true` for the five colors that can form a match.
    #[must_use]
    #[inline]
    pub const fn is_normal(self) -> bool {
        !self.is_joker()
    }

    /// Returns `true` for [`Color::Joker`].
    #[must_use]
    #[inline]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the single-letter text form of the color.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Joker => 'J',
        }
    }

    /// Parses the single-letter text form of a color (case-insensitive).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'B' => Some(Self::Blue),
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'P' => Some(Self::Purple),
            'J' => Some(Self::Joker),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error returned when a string is not a valid color.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid color: {input:?} (expected one of R, B, G, Y, P, J)")]
pub struct ColorParseError {
    input: String,
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => match s.to_ascii_lowercase().as_str() {
                "red" => Some(Self::Red),
                "blue" => Some(Self::Blue),
                "green" => Some(Self::Green),
                "yellow" => Some(Self::Yellow),
                "purple" => Some(Self::Purple),
                "joker" | "heart" => Some(Self::Joker),
                _ => None,
            },
        }
        .ok_or_else(|| ColorParseError {
            input: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_char(color.to_char()), Some(color));
        }
        assert_eq!(Color::from_char('r'), Some(Color::Red));
        assert_eq!(Color::from_char('.'), None);
    }

    #[test]
    fn test_normal_and_joker() {
        assert!(Color::NORMAL.iter().all(|c| c.is_normal()));
        assert!(Color::Joker.is_joker());
        assert_eq!(Color::ALL.iter().filter(|c| c.is_joker()).count(), 1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("G".parse::<Color>(), Ok(Color::Green));
        assert_eq!("purple".parse::<Color>(), Ok(Color::Purple));
        assert_eq!("Heart".parse::<Color>(), Ok(Color::Joker));
        let err = "orange".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("orange"));
    }
}
