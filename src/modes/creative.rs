/*
creative.rs

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

//! Free drawing: no target, no timer, no end.

use rand::RngCore;

use crate::generator::Generated;
use crate::grid::Grid;

use super::{Mode, Rules};

/// Canvas size of the creative mode.
const SIZE: usize = 32;

pub struct Creative;

impl Rules for Creative {
    fn mode(&self) -> Mode {
        Mode::Creative
    }

    fn grid_size(&self, _level: u32) -> usize {
        SIZE
    }

    fn time_budget(&self, _level: u32) -> Option<u32> {
        None
    }

    fn generate(&self, _level: u32, size: usize, _rng: &mut dyn RngCore) -> Generated {
        Generated::empty(size)
    }

    fn check_win(&self, _player: &Grid, _target: &Grid) -> Option<bool> {
        None
    }
}
