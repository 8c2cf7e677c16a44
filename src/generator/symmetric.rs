/*
symmetric.rs

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

//! Generate a left-right mirrored pattern.

use log::debug;
use rand::{Rng, RngCore};

use crate::grid::Grid;
use crate::palette::{Color, STANDARD};

/// Probability for a cell of the left half to be painted.
const FILL_PROBABILITY: f64 = 0.4;

/// Largest number of colors in a pattern.
const MAX_COLORS: u32 = 4;

/// Return the number of colors for the given level: one more color every three levels.
pub fn color_count(level: u32) -> usize {
    MAX_COLORS.min(1 + level.div_ceil(3)) as usize
}

/// Generate a pattern that is symmetric around the vertical axis.
///
/// The colors of the pattern are drawn from the full catalog (a color can be drawn twice).
/// Every cell of the left half, middle column included, gets painted with a probability of 0.4,
/// and its mirror cell in the right half receives the same color.
pub fn generate(size: usize, level: u32, rng: &mut dyn RngCore) -> Grid {
    let colors: Vec<Color> = (0..color_count(level))
        .map(|_| STANDARD[rng.random_range(0..STANDARD.len())])
        .collect();
    debug!("Symmetric pattern {size}x{size} with colors {colors:?}");

    let mut grid: Grid = Grid::new(size);
    let half_width: usize = size.div_ceil(2);
    for y in 0..size {
        for x in 0..half_width {
            if rng.random_bool(FILL_PROBABILITY) {
                let color: Color = colors[rng.random_range(0..colors.len())];
                grid.set(x, y, Some(color));
                grid.set(size - 1 - x, y, Some(color));
            }
        }
    }
    grid
}
