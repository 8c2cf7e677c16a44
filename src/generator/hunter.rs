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

//! Hide one odd pixel in a uniform canvas.

use log::debug;
use rand::{Rng, RngCore};

use crate::grid::Grid;
use crate::palette::{Color, STANDARD};

/// Choose the coordinates of the odd pixel.
pub fn pick_target(size: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    (rng.random_range(0..size), rng.random_range(0..size))
}

/// Fill the grid with a random base color and paint the odd pixel with another color.
pub fn paint(grid: &mut Grid, target: (usize, usize), rng: &mut dyn RngCore) {
    let base: Color = STANDARD[rng.random_range(0..STANDARD.len())];

    // Draw again until the colors differ
    let mut odd: Color = STANDARD[rng.random_range(0..STANDARD.len())];
    while odd == base {
        odd = STANDARD[rng.random_range(0..STANDARD.len())];
    }
    debug!("Odd pixel at {target:?}: {odd} on {base}");

    grid.fill(base);
    grid.set(target.0, target.1, Some(odd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn exactly_one_odd_pixel() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        for size in [8, 10, 16] {
            let target: (usize, usize) = pick_target(size, &mut rng);
            assert!(target.0 < size && target.1 < size);

            let mut grid: Grid = Grid::new(size);
            paint(&mut grid, target, &mut rng);
            let odd: Color = grid.get(target.0, target.1).unwrap();
            let others: Vec<Color> = grid
                .iter()
                .filter(|(x, y, _)| (*x, *y) != target)
                .filter_map(|(_, _, c)| c)
                .collect();
            assert_eq!(others.len(), size * size - 1);
            assert!(others.iter().all(|c| *c == others[0] && *c != odd));
        }
    }
}
