/*
palette_swap.rs

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

//! Palette swap mode.
//!
//! The swatches show the usual colors, but each one paints another color of the catalog.
//! The player has to find out which swatch gives which color.

use rand::RngCore;

use crate::generator::{Generated, swap, symmetric};
use crate::level::{Aux, Board};
use crate::palette::Color;

use super::{Mode, Outcome, Rules, Tool, apply_standard};

pub struct PaletteSwap;

impl Rules for PaletteSwap {
    fn mode(&self) -> Mode {
        Mode::PaletteSwap
    }

    fn generate(&self, level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: symmetric::generate(size, level, rng),
            aux: Aux::PaletteSwap {
                map: swap::generate(rng),
            },
        }
    }

    fn apply_tool(&self, board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
        let painted: Color = match (&board.aux, tool) {
            (Aux::PaletteSwap { map }, Tool::Pencil | Tool::Bucket) => {
                map.get(&color).copied().unwrap_or(color)
            }
            _ => color,
        };
        apply_standard(board, tool, painted, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GREEN, RED};
    use std::collections::BTreeMap;

    fn board() -> Board {
        let mut board: Board = Board::new(8);
        board.aux = Aux::PaletteSwap {
            map: BTreeMap::from([(RED, BLUE), (BLUE, GREEN), (GREEN, RED)]),
        };
        board
    }

    #[test]
    fn swatches_paint_the_swapped_color() {
        let mut board: Board = board();
        PaletteSwap.apply_tool(&mut board, Tool::Pencil, RED, 0, 0);
        assert_eq!(board.player.get(0, 0), Some(BLUE));

        PaletteSwap.apply_tool(&mut board, Tool::Bucket, BLUE, 4, 4);
        assert_eq!(board.player.get(4, 4), Some(GREEN));
        assert_eq!(board.player.get(0, 0), Some(BLUE));

        PaletteSwap.apply_tool(&mut board, Tool::Eraser, RED, 0, 0);
        assert_eq!(board.player.get(0, 0), None);
    }

    #[test]
    fn generated_level_carries_the_map() {
        let mut rng = rand::rng();
        let generated: Generated = PaletteSwap.generate(2, 8, &mut rng);
        assert!(matches!(generated.aux, Aux::PaletteSwap { ref map } if map.len() == 20));
        assert_eq!(generated.target.size(), 8);
    }
}
