/*
palette.rs

Copyright 2025 Hervé Quatremain

This file is part of Pixeles.

Pixeles is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pixeles is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pixeles. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Color catalog and color relationships.
//!
//! Colors are plain RGB values identified by their `#RRGGBB` representation.
//! The module provides the fixed palettes used by the modes, the color mixing table of the
//! colormix mode, and the negative pairs of the negative mode.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    /// Create a [`Color`] object from a `0xRRGGBB` value.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, PartialEq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid color {:?}, expected #RRGGBB", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex: &str = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ColorParseError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Color::from_rgb)
            .map_err(|_| ColorParseError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

pub const BLACK: Color = Color::from_rgb(0x000000);
pub const WHITE: Color = Color::from_rgb(0xFFFFFF);
pub const RED: Color = Color::from_rgb(0xFF0000);
pub const GREEN: Color = Color::from_rgb(0x00FF00);
pub const BLUE: Color = Color::from_rgb(0x0000FF);
pub const YELLOW: Color = Color::from_rgb(0xFFFF00);
pub const CYAN: Color = Color::from_rgb(0x00FFFF);
pub const MAGENTA: Color = Color::from_rgb(0xFF00FF);
pub const PURPLE: Color = Color::from_rgb(0x800080);
pub const ORANGE: Color = Color::from_rgb(0xFFA500);
pub const DARK_GREEN: Color = Color::from_rgb(0x008000);

/// Sculptor's stone.
pub const STONE: Color = Color::from_rgb(0x5F574F);

/// Infected cells in the virus mode.
pub const VIRUS: Color = Color::from_rgb(0x00FF88);

/// Full catalog, available to most modes.
pub const STANDARD: [Color; 20] = [
    Color::from_rgb(0x000000),
    Color::from_rgb(0x1D2B53),
    Color::from_rgb(0x7E2553),
    Color::from_rgb(0x008751),
    Color::from_rgb(0xAB5236),
    Color::from_rgb(0x5F574F),
    Color::from_rgb(0xC2C3C7),
    Color::from_rgb(0xFFF1E8),
    Color::from_rgb(0xFF004D),
    Color::from_rgb(0xFFA300),
    Color::from_rgb(0xFFEC27),
    Color::from_rgb(0x00E436),
    Color::from_rgb(0x29ADFF),
    Color::from_rgb(0x83769C),
    Color::from_rgb(0xFF77A8),
    Color::from_rgb(0xFFCCAA),
    Color::from_rgb(0x00FF88),
    Color::from_rgb(0xB026FF),
    Color::from_rgb(0xFF006E),
    Color::from_rgb(0x00FFFF),
];

/// Colors the player mixes in the colormix mode.
pub const PRIMARIES: [Color; 5] = [RED, BLUE, YELLOW, WHITE, BLACK];

/// Mixing results, which are the colors of the colormix targets.
pub const SECONDARIES: [Color; 3] = [PURPLE, ORANGE, DARK_GREEN];

/// Complementary pairs. The first color is the one shown in the negative target.
pub const NEGATIVE_PAIRS: [(Color, Color); 4] =
    [(BLACK, WHITE), (RED, CYAN), (GREEN, MAGENTA), (BLUE, YELLOW)];

/// Palette of the negative mode: both colors of every pair.
pub const NEGATIVES: [Color; 8] = [BLACK, WHITE, RED, CYAN, GREEN, MAGENTA, BLUE, YELLOW];

/// Palette of the sculptor mode.
pub const SCULPTOR: [Color; 1] = [STONE];

/// Ordered pairs that mix into a secondary color.
const MIXES: [((Color, Color), Color); 3] = [
    ((RED, BLUE), PURPLE),
    ((RED, YELLOW), ORANGE),
    ((BLUE, YELLOW), DARK_GREEN),
];

/// Return the color obtained by mixing the two colors, in any order, or None if the two colors
/// do not mix.
pub fn mix(existing: Color, incoming: Color) -> Option<Color> {
    MIXES
        .iter()
        .find(|((a, b), _)| {
            (*a == existing && *b == incoming) || (*a == incoming && *b == existing)
        })
        .map(|(_, result)| *result)
}

/// Return the negative partner of the given color.
pub fn negative(color: Color) -> Option<Color> {
    NEGATIVE_PAIRS.iter().find_map(|(a, b)| {
        if *a == color {
            Some(*b)
        } else if *b == color {
            Some(*a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let c: Color = "#ff004d".parse().unwrap();
        assert_eq!(c, STANDARD[8]);
        assert_eq!(c.to_string(), "#FF004D");
        assert_eq!(c, Color::from_rgb(0xff004d));
        assert!("FF004D".parse::<Color>().is_err());
        assert!("#FF004".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn mixes_are_unordered() {
        assert_eq!(mix(RED, BLUE), Some(PURPLE));
        assert_eq!(mix(BLUE, RED), Some(PURPLE));
        assert_eq!(mix(YELLOW, RED), Some(ORANGE));
        assert_eq!(mix(YELLOW, BLUE), Some(DARK_GREEN));
        assert_eq!(mix(RED, WHITE), None);
        assert_eq!(mix(RED, RED), None);
    }

    #[test]
    fn negatives_are_symmetric() {
        for color in NEGATIVES {
            let partner: Color = negative(color).unwrap();
            assert_ne!(partner, color);
            assert_eq!(negative(partner), Some(color));
        }
        assert_eq!(negative(RED), Some(CYAN));
        assert_eq!(negative(STONE), None);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json: String = serde_json::to_string(&VIRUS).unwrap();
        assert_eq!(json, "\"#00FF88\"");
        let back: Color = serde_json::from_str("\"#00ff88\"").unwrap();
        assert_eq!(back, VIRUS);
    }
}
