/*
defusal.rs

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

//! Defusal mode: the canvas is a noisy copy of the target that the player must clean up.

use log::debug;
use rand::{Rng, RngCore};

use crate::grid::Grid;
use crate::level::Board;
use crate::palette::STANDARD;

use super::{Mode, Rules};

pub struct Defusal;

/// Probability for a cell to receive noise.
pub fn noise_level(level: u32) -> f64 {
    (0.2 + 0.02 * f64::from(level)).min(1.0)
}

/// Add noise to the grid: each noisy cell is either cleared or painted with a random color.
pub fn add_noise(grid: &mut Grid, level: u32, rng: &mut dyn RngCore) {
    let probability: f64 = noise_level(level);
    let size: usize = grid.size();
    let mut noisy: usize = 0;
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(probability) {
                noisy += 1;
                if rng.random_bool(0.5) {
                    grid.set(x, y, None);
                } else {
                    grid.set(x, y, Some(STANDARD[rng.random_range(0..STANDARD.len())]));
                }
            }
        }
    }
    debug!("{noisy} noisy cells (probability {probability})");
}

impl Rules for Defusal {
    fn mode(&self) -> Mode {
        Mode::Defusal
    }

    fn init_player_grid(&self, board: &mut Board, level: u32, rng: &mut dyn RngCore) {
        board.player = board.target.clone();
        add_noise(&mut board.player, level, rng);
    }
}
