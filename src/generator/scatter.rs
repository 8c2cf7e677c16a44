/*
scatter.rs

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

//! Generate patterns of isolated cells for the colormix and negative modes.

use rand::{Rng, RngCore};

use crate::grid::Grid;
use crate::palette::{Color, NEGATIVE_PAIRS, SECONDARIES};

/// Probability for a cell to be painted.
const FILL_PROBABILITY: f64 = 0.3;

/// Paint each cell independently with a probability of 0.3, using the color that `pick` returns.
fn scatter<F>(size: usize, rng: &mut dyn RngCore, mut pick: F) -> Grid
where
    F: FnMut(&mut dyn RngCore) -> Color,
{
    let mut grid: Grid = Grid::new(size);
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(FILL_PROBABILITY) {
                let color: Color = pick(&mut *rng);
                grid.set(x, y, Some(color));
            }
        }
    }
    grid
}

/// Target made of secondary colors. The player obtains them by mixing primary colors.
pub fn colormix(size: usize, rng: &mut dyn RngCore) -> Grid {
    scatter(size, rng, |r| SECONDARIES[r.random_range(0..SECONDARIES.len())])
}

/// Target made of the first color of the negative pairs. The player must paint the partner
/// color.
pub fn negative(size: usize, rng: &mut dyn RngCore) -> Grid {
    scatter(size, rng, |r| {
        NEGATIVE_PAIRS[r.random_range(0..NEGATIVE_PAIRS.len())].0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn colormix_uses_secondaries() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let grid: Grid = colormix(8, &mut rng);
        assert!(grid.count_filled() > 0);
        assert!(
            grid.iter()
                .filter_map(|(_, _, c)| c)
                .all(|c| SECONDARIES.contains(&c))
        );
    }

    #[test]
    fn negative_shows_first_colors_only() {
        let mut rng: StdRng = StdRng::seed_from_u64(2);
        let grid: Grid = negative(10, &mut rng);
        assert!(grid.count_filled() > 0);
        assert!(
            grid.iter()
                .filter_map(|(_, _, c)| c)
                .all(|c| NEGATIVE_PAIRS.iter().any(|(a, _)| *a == c))
        );
    }
}
