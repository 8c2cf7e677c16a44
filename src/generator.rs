/*
generator.rs

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

//! Generate random targets.
//!
//! Each mode builds its level from one of the generators in this module:
//!
//! * [`symmetric::generate`] builds a left-right mirrored pattern. Most of the matching modes
//!   use it.
//! * [`scatter::colormix`] and [`scatter::negative`] scatter isolated cells over the grid.
//! * [`hunter::pick_target`] and [`hunter::paint`] hide the odd pixel in a uniform canvas.
//! * [`sequence::generate`] builds the list of cells that the player must click in order.
//! * [`swap::generate`] shuffles the palette for the palette swap mode.
//!
//! All the generators take the random source as a parameter so that tests can use a seeded
//! generator.

pub mod hunter;
pub mod scatter;
pub mod sequence;
pub mod swap;
pub mod symmetric;

use crate::grid::Grid;
use crate::level::Aux;

/// Generated level: target pattern and mode-specific data.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub target: Grid,
    pub aux: Aux,
}

impl Generated {
    /// Level without target pattern.
    pub fn empty(size: usize) -> Self {
        Self {
            target: Grid::new(size),
            aux: Aux::None,
        }
    }

    /// Level with the given target pattern and no mode-specific data.
    pub fn with_target(target: Grid) -> Self {
        Self {
            target,
            aux: Aux::None,
        }
    }
}
