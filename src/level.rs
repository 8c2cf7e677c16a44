/*
level.rs

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

//! Data of the level being played.
//!
//! A [`Board`] groups the player's canvas, the target pattern, and the auxiliary data that some
//! modes need.
//! The auxiliary data is created when the level starts and is dropped with the board when the
//! next level starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::grid::Grid;
use crate::palette::Color;

/// One cell of the sequence that the player must reproduce.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

/// Falling block in the rain mode.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Drop {
    /// Grid column.
    pub column: usize,

    /// Vertical position of the top of the block, in pixels.
    pub y: f64,

    /// Pixels per frame.
    pub speed: f64,

    pub color: Color,
}

/// Progress of the sequence mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SequenceState {
    /// Ordered cells to reproduce.
    pub pattern: Vec<Reveal>,

    /// Next reveal to show while the sequence is playing, or next reveal the player must click.
    pub index: usize,

    /// Whether the sequence is still playing. Player clicks are ignored until it ends.
    pub showing: bool,
}

/// Mode-specific data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum Aux {
    #[default]
    None,

    /// Coordinates of the odd pixel.
    Hunter { target: (usize, usize) },

    Sequence(SequenceState),

    Rain { drops: Vec<Drop> },

    /// The color that each swatch actually paints.
    PaletteSwap { map: BTreeMap<Color, Color> },

    /// Whether the target is currently shown to the player.
    Memory { target_visible: bool },

    /// Whether the player's canvas is currently visible.
    Blind { visible: bool },
}

/// Grids and auxiliary data of the level in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Board {
    /// Player's canvas.
    pub player: Grid,

    /// Reference pattern.
    pub target: Grid,

    pub aux: Aux,
}

impl Board {
    /// Create a [`Board`] object with empty grids.
    pub fn new(size: usize) -> Self {
        Self {
            player: Grid::new(size),
            target: Grid::new(size),
            aux: Aux::None,
        }
    }

    /// Return the number of rows (and columns) of the grids.
    pub fn size(&self) -> usize {
        self.player.size()
    }
}
