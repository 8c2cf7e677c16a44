/*
kaleidoscope.rs

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

//! Kaleidoscope mode: the pencil and the eraser act on the four mirrored positions of the cell.

use crate::events::Cue;
use crate::level::Board;
use crate::palette::Color;

use super::{Mode, Outcome, Rules, Tool, draw_pitch};

pub struct Kaleidoscope;

/// Return the cell and its reflections across the vertical and horizontal axes.
///
/// Cells on an axis are their own reflection, so the list can contain duplicates.
pub fn reflections(size: usize, x: usize, y: usize) -> [(usize, usize); 4] {
    let mx: usize = size - 1 - x;
    let my: usize = size - 1 - y;
    [(x, y), (mx, y), (x, my), (mx, my)]
}

impl Rules for Kaleidoscope {
    fn mode(&self) -> Mode {
        Mode::Kaleidoscope
    }

    fn apply_tool(&self, board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
        let paint: Option<Color> = match tool {
            Tool::Pencil => Some(color),
            Tool::Eraser => None,
            Tool::Bucket => return Outcome::default(),
        };
        for (px, py) in reflections(board.size(), x, y) {
            if board.player.in_bounds(px, py) {
                board.player.set(px, py, paint);
            }
        }
        Outcome::sound(Cue::Draw, draw_pitch(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::RED;

    #[test]
    fn strokes_are_mirrored() {
        let mut board: Board = Board::new(8);
        let outcome: Outcome = Kaleidoscope.apply_tool(&mut board, Tool::Pencil, RED, 1, 2);
        assert_eq!(outcome.sound.map(|s| s.cue), Some(Cue::Draw));
        assert_eq!(board.player.positions_of(RED), vec![(1, 2), (6, 2), (1, 5), (6, 5)]);

        Kaleidoscope.apply_tool(&mut board, Tool::Eraser, RED, 6, 5);
        assert_eq!(board.player.count_filled(), 0);
    }

    #[test]
    fn center_cells_on_odd_grids() {
        let mut board: Board = Board::new(5);
        Kaleidoscope.apply_tool(&mut board, Tool::Pencil, RED, 2, 2);
        assert_eq!(board.player.positions_of(RED), vec![(2, 2)]);
        Kaleidoscope.apply_tool(&mut board, Tool::Pencil, RED, 2, 0);
        assert_eq!(board.player.count_filled(), 3);
    }

    #[test]
    fn bucket_does_nothing() {
        let mut board: Board = Board::new(8);
        let outcome: Outcome = Kaleidoscope.apply_tool(&mut board, Tool::Bucket, RED, 0, 0);
        assert_eq!(outcome, Outcome::default());
        assert_eq!(board.player.count_filled(), 0);
    }
}
