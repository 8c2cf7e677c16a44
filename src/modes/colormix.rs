/*
colormix.rs

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

//! Colormix mode.
//!
//! The target uses secondary colors only, but the player's palette has primary colors.
//! Painting a primary color over another primary color mixes them.

use rand::RngCore;

use crate::events::Cue;
use crate::generator::{Generated, scatter};
use crate::level::Board;
use crate::palette::{self, Color, PRIMARIES};

use super::{Mode, Outcome, Rules, Tool, apply_standard};

pub struct Colormix;

impl Rules for Colormix {
    fn mode(&self) -> Mode {
        Mode::Colormix
    }

    fn palette(&self) -> &'static [Color] {
        &PRIMARIES
    }

    fn generate(&self, _level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated::with_target(scatter::colormix(size, rng))
    }

    fn apply_tool(&self, board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
        if tool == Tool::Pencil
            && let Some(existing) = board.player.get(x, y)
            && existing != color
            && let Some(mixed) = palette::mix(existing, color)
        {
            board.player.set(x, y, Some(mixed));
            return Outcome::sound(Cue::PowerUp, 500.0);
        }
        apply_standard(board, tool, color, x, y)
    }
}
