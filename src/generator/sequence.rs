/*
sequence.rs

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

//! Generate the cells to memorize in the sequence mode.

use rand::{Rng, RngCore};

use crate::level::Reveal;
use crate::palette::STANDARD;

/// Longest sequence.
const MAX_LENGTH: u32 = 10;

/// Return the sequence length for the given level.
pub fn length(level: u32) -> usize {
    MAX_LENGTH.min(3 + level) as usize
}

/// Generate a list of random cells with random colors.
///
/// The same cell can appear several times in the list.
pub fn generate(size: usize, level: u32, rng: &mut dyn RngCore) -> Vec<Reveal> {
    (0..length(level))
        .map(|_| Reveal {
            x: rng.random_range(0..size),
            y: rng.random_range(0..size),
            color: STANDARD[rng.random_range(0..STANDARD.len())],
        })
        .collect()
}
