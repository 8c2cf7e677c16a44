/*
grid.rs

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

//! Square grid of optional colors.
//!
//! The same container stores the player's canvas and the target pattern.
//! Cells are addressed with `(x, y)` coordinates, `x` being the column and `y` the row.

use serde::{Deserialize, Serialize};

use crate::palette::Color;

/// Grid object.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an empty [`Grid`] object of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinates are inside the grid.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Return the color of a cell, or None if the cell is empty or out of the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if self.in_bounds(x, y) {
            self.cells[y * self.size + x]
        } else {
            None
        }
    }

    /// Set the color of a cell and return whether the cell changed.
    ///
    /// Coordinates out of the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Option<Color>) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let cell: &mut Option<Color> = &mut self.cells[y * self.size + x];
        if *cell == color {
            return false;
        }
        *cell = color;
        true
    }

    /// Set all the cells to the given color.
    pub fn fill(&mut self, color: Color) {
        self.cells.fill(Some(color));
    }

    /// Return one row of the grid.
    pub fn row(&self, y: usize) -> &[Option<Color>] {
        &self.cells[y * self.size..(y + 1) * self.size]
    }

    /// Iterate over all the cells as `(x, y, color)` tuples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<Color>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (i % self.size, i / self.size, *c))
    }

    /// Return the coordinates of the cells that have the given color.
    pub fn positions_of(&self, color: Color) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, c)| *c == Some(color))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Return the number of non-empty cells.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether the two grids have their non-empty cells at the same positions, whatever their
    /// colors.
    pub fn same_footprint(&self, other: &Grid) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_some() == b.is_some())
    }

    /// Flood fill from the given cell and return the number of cells that changed.
    ///
    /// All the cells that are 4-connected to the starting cell and that have the same color as
    /// the starting cell receive the new color.
    /// Nothing happens if the starting cell already has the new color, or if the starting cell is
    /// out of the grid.
    pub fn flood_fill(&mut self, x: usize, y: usize, color: Option<Color>) -> usize {
        if !self.in_bounds(x, y) {
            return 0;
        }
        let origin: Option<Color> = self.get(x, y);
        if origin == color {
            return 0;
        }

        let mut changed: usize = 0;
        let mut stack: Vec<(usize, usize)> = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let i: usize = cy * self.size + cx;
            // The cell has been pushed several times and was already processed
            if self.cells[i] != origin {
                continue;
            }
            self.cells[i] = color;
            changed += 1;
            if cx > 0 {
                stack.push((cx - 1, cy));
            }
            if cx + 1 < self.size {
                stack.push((cx + 1, cy));
            }
            if cy > 0 {
                stack.push((cx, cy - 1));
            }
            if cy + 1 < self.size {
                stack.push((cx, cy + 1));
            }
        }
        changed
    }
}
