/*
negative.rs

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

//! Negative mode: paint the complementary color of every target cell.

use rand::RngCore;

use crate::generator::{Generated, scatter};
use crate::grid::Grid;
use crate::palette::{self, Color, NEGATIVES};

use super::{Mode, Rules};

pub struct Negative;

/// Whether the player's canvas is the negative of the target.
///
/// Empty target cells must stay empty. A target color without partner can never be matched.
pub fn is_negative(player: &Grid, target: &Grid) -> bool {
    player.size() == target.size()
        && player
            .iter()
            .zip(target.iter())
            .all(|((_, _, p), (_, _, t))| match t {
                None => p.is_none(),
                Some(t) => p.is_some() && p == palette::negative(t),
            })
}

impl Rules for Negative {
    fn mode(&self) -> Mode {
        Mode::Negative
    }

    fn palette(&self) -> &'static [Color] {
        &NEGATIVES
    }

    fn generate(&self, _level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated::with_target(scatter::negative(size, rng))
    }

    fn check_win(&self, player: &Grid, target: &Grid) -> Option<bool> {
        Some(is_negative(player, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CYAN, NEGATIVE_PAIRS, RED, STONE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn partners_solve_the_level() {
        let mut rng: StdRng = StdRng::seed_from_u64(21);
        for _ in 0..10 {
            let target: Grid = scatter::negative(8, &mut rng);
            let mut player: Grid = Grid::new(8);
            for (x, y, c) in target.iter() {
                player.set(x, y, c.and_then(palette::negative));
            }
            assert_eq!(Negative.check_win(&player, &target), Some(true));

            // Painting the shown color instead of its partner fails
            if let Some((x, y, c)) = target.iter().find(|(_, _, c)| c.is_some()) {
                let mut wrong: Grid = player.clone();
                wrong.set(x, y, c);
                assert_eq!(Negative.check_win(&wrong, &target), Some(false));
                wrong.set(x, y, None);
                assert_eq!(Negative.check_win(&wrong, &target), Some(false));
            }

            // Extra paint on an empty target cell fails
            if let Some((x, y, _)) = target.iter().find(|(_, _, c)| c.is_none()) {
                let mut extra: Grid = player.clone();
                extra.set(x, y, Some(NEGATIVE_PAIRS[0].1));
                assert_eq!(Negative.check_win(&extra, &target), Some(false));
            }
        }
    }

    #[test]
    fn red_needs_cyan() {
        let mut target: Grid = Grid::new(8);
        let mut player: Grid = Grid::new(8);
        target.set(0, 0, Some(RED));
        player.set(0, 0, Some(CYAN));
        assert!(is_negative(&player, &target));
        player.set(0, 0, Some(RED));
        assert!(!is_negative(&player, &target));
    }

    #[test]
    fn colors_without_partner_never_match() {
        let mut target: Grid = Grid::new(8);
        target.set(0, 0, Some(STONE));
        assert!(!is_negative(&Grid::new(8), &target));
    }
}
