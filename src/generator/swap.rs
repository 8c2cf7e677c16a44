/*
swap.rs

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

//! Shuffle the palette for the palette swap mode.

use rand::RngCore;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

use crate::palette::{Color, STANDARD};

/// Map every color of the catalog to a color of a shuffled copy of the catalog.
///
/// The map is a permutation, so every target color can still be painted.
pub fn generate(rng: &mut dyn RngCore) -> BTreeMap<Color, Color> {
    let mut shuffled: Vec<Color> = STANDARD.to_vec();
    shuffled.shuffle(rng);
    STANDARD.iter().copied().zip(shuffled).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    #[test]
    fn map_is_a_permutation() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        let map: BTreeMap<Color, Color> = generate(&mut rng);
        assert_eq!(map.len(), STANDARD.len());
        let images: BTreeSet<Color> = map.values().copied().collect();
        assert_eq!(images.len(), STANDARD.len());
        assert!(images.iter().all(|c| STANDARD.contains(c)));
    }
}
