/*
hunter.rs

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

//! Hunter mode: find the pixel that does not have the same color as the others.
//!
//! The first click decides the level, whatever the selected tool.

use rand::RngCore;

use crate::generator::{Generated, hunter};
use crate::grid::Grid;
use crate::level::{Aux, Board};
use crate::palette::Color;

use super::{Mode, Outcome, Rules, Tool};

pub struct Hunter;

impl Rules for Hunter {
    fn mode(&self) -> Mode {
        Mode::Hunter
    }

    fn generate(&self, _level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: Grid::new(size),
            aux: Aux::Hunter {
                target: hunter::pick_target(size, rng),
            },
        }
    }

    fn init_player_grid(&self, board: &mut Board, _level: u32, rng: &mut dyn RngCore) {
        if let Aux::Hunter { target } = board.aux {
            hunter::paint(&mut board.player, target, rng);
        }
    }

    fn apply_tool(&self, board: &mut Board, _tool: Tool, _color: Color, x: usize, y: usize) -> Outcome {
        match board.aux {
            Aux::Hunter { target } if target == (x, y) => Outcome::success(),
            _ => Outcome::failure("Wrong pixel!"),
        }
    }

    fn check_win(&self, _player: &Grid, _target: &Grid) -> Option<bool> {
        None
    }
}
