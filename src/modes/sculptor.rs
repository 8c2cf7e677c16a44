/*
sculptor.rs

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

//! Sculptor mode.
//!
//! The canvas starts as a block of stone and the pencil carves it.
//! The level is solved when the remaining stone has the shape of the target: every painted
//! target cell is still stone, and every empty target cell has been carved out.
//! Colors do not matter, only the shape does.

use rand::RngCore;

use crate::events::Cue;
use crate::grid::Grid;
use crate::level::Board;
use crate::palette::{Color, SCULPTOR, STONE};

use super::{Mode, Outcome, Rules, Tool, apply_standard};

pub struct Sculptor;

impl Rules for Sculptor {
    fn mode(&self) -> Mode {
        Mode::Sculptor
    }

    fn palette(&self) -> &'static [Color] {
        &SCULPTOR
    }

    fn init_player_grid(&self, board: &mut Board, _level: u32, _rng: &mut dyn RngCore) {
        board.player.fill(STONE);
    }

    fn apply_tool(&self, board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
        match tool {
            Tool::Pencil => {
                if board.player.set(x, y, None) {
                    Outcome::sound(Cue::Draw, 100.0)
                } else {
                    Outcome::default()
                }
            }
            // Carved stone cannot be put back one cell at a time
            Tool::Eraser => Outcome::default(),
            Tool::Bucket => apply_standard(board, tool, color, x, y),
        }
    }

    fn check_win(&self, player: &Grid, target: &Grid) -> Option<bool> {
        Some(player.same_footprint(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{RED, STANDARD};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn carving_reveals_the_shape() {
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        let mut board: Board = Board::new(8);
        board.target.set(3, 3, Some(RED));
        board.target.set(4, 3, Some(RED));
        Sculptor.init_player_grid(&mut board, 1, &mut rng);
        assert_eq!(board.player.count_filled(), 64);
        assert_eq!(Sculptor.check_win(&board.player, &board.target), Some(false));

        for (x, y, c) in board.target.clone().iter() {
            if c.is_none() {
                Sculptor.apply_tool(&mut board, Tool::Pencil, STONE, x, y);
            }
        }
        assert_eq!(board.player.count_filled(), 2);
        assert_eq!(Sculptor.check_win(&board.player, &board.target), Some(true));

        // Carving too much breaks the shape
        Sculptor.apply_tool(&mut board, Tool::Pencil, STONE, 3, 3);
        assert_eq!(Sculptor.check_win(&board.player, &board.target), Some(false));
    }

    #[test]
    fn eraser_does_nothing() {
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        let mut board: Board = Board::new(8);
        Sculptor.init_player_grid(&mut board, 1, &mut rng);
        let outcome: Outcome = Sculptor.apply_tool(&mut board, Tool::Eraser, STONE, 0, 0);
        assert_eq!(outcome, Outcome::default());
        assert_eq!(board.player.get(0, 0), Some(STONE));
    }

    #[test]
    fn stone_color_does_not_matter() {
        let mut target: Grid = Grid::new(10);
        target.set(5, 5, Some(STANDARD[3]));
        for color in STANDARD {
            let mut player: Grid = Grid::new(10);
            player.set(5, 5, Some(color));
            assert_eq!(Sculptor.check_win(&player, &target), Some(true));
            player.set(0, 5, Some(color));
            assert_eq!(Sculptor.check_win(&player, &target), Some(false));
        }
    }
}
