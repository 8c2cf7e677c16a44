/*
rain.rs

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

//! Rain mode.
//!
//! Blocks fall down the canvas and the player clicks them before they reach the bottom.
//! Each caught block is worth 10 points, each missed block costs a life.
//! The player wins the level by holding until the time runs out.
//!
//! Block positions are in canvas pixels: the column of a block is a grid column, but its
//! vertical position moves by a fraction of a cell at each frame.
//! Catching goes through [`Rules::pointer_hit`]; the painting tools do nothing in this mode.

use rand::{Rng, RngCore};

use crate::config::Config;
use crate::events::Cue;
use crate::generator::Generated;
use crate::grid::Grid;
use crate::level::{Aux, Board, Drop};
use crate::palette::{Color, STANDARD};

use super::{Mode, Outcome, Rules, TimeoutPolicy, Tool};

const SIZE: usize = 16;
const DURATION_SEC: u32 = 60;
const CATCH_POINTS: u32 = 10;

pub struct Rain;

/// Probability for a new block to appear at each frame.
pub fn spawn_probability(level: u32) -> f64 {
    (0.05 + 0.01 * f64::from(level)).min(1.0)
}

/// Pixels per frame of the blocks.
pub fn drop_speed(level: u32) -> f64 {
    2.0 + 0.5 * f64::from(level)
}

/// Move all the blocks down by their speed and remove the blocks that went past the bottom of
/// the canvas. Return the number of removed blocks.
pub fn advance_drops(drops: &mut Vec<Drop>, canvas_height: f64) -> usize {
    let before: usize = drops.len();
    drops.retain_mut(|drop| {
        drop.y += drop.speed;
        drop.y <= canvas_height
    });
    before - drops.len()
}

/// Remove the newest block under the pointer. Return whether a block was caught.
pub fn catch(drops: &mut Vec<Drop>, px: f64, py: f64, cell_size: f64) -> bool {
    let hit: Option<usize> = drops.iter().rposition(|drop| {
        let left: f64 = drop.column as f64 * cell_size;
        px > left && px < left + cell_size && py > drop.y && py < drop.y + cell_size
    });
    match hit {
        Some(i) => {
            drops.remove(i);
            true
        }
        None => false,
    }
}

impl Rules for Rain {
    fn mode(&self) -> Mode {
        Mode::Rain
    }

    fn grid_size(&self, _level: u32) -> usize {
        SIZE
    }

    fn time_budget(&self, _level: u32) -> Option<u32> {
        Some(DURATION_SEC)
    }

    fn timeout_policy(&self) -> TimeoutPolicy {
        TimeoutPolicy::Succeed
    }

    fn generate(&self, _level: u32, size: usize, _rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: Grid::new(size),
            aux: Aux::Rain { drops: Vec::new() },
        }
    }

    fn apply_tool(&self, _board: &mut Board, _tool: Tool, _color: Color, _x: usize, _y: usize) -> Outcome {
        Outcome::default()
    }

    fn check_win(&self, _player: &Grid, _target: &Grid) -> Option<bool> {
        None
    }

    fn frame(
        &self,
        board: &mut Board,
        level: u32,
        config: &Config,
        rng: &mut dyn RngCore,
    ) -> Vec<Outcome> {
        let size: usize = board.size();
        let Aux::Rain { drops } = &mut board.aux else {
            return Vec::new();
        };
        if size == 0 {
            return Vec::new();
        }
        let cell_size: f64 = config.canvas_size / size as f64;

        if rng.random_bool(spawn_probability(level)) {
            drops.push(Drop {
                column: rng.random_range(0..size),
                y: -cell_size,
                speed: drop_speed(level),
                color: STANDARD[rng.random_range(0..STANDARD.len())],
            });
        }

        let missed: usize = advance_drops(drops, config.canvas_size);
        (0..missed)
            .map(|_| Outcome::failure("Missed drop!"))
            .collect()
    }

    fn pointer_hit(&self, board: &mut Board, px: f64, py: f64, config: &Config) -> Option<Outcome> {
        let size: usize = board.size();
        let Aux::Rain { drops } = &mut board.aux else {
            return None;
        };
        if size == 0 || !catch(drops, px, py, config.canvas_size / size as f64) {
            return None;
        }
        Some(Outcome {
            points: CATCH_POINTS,
            ..Outcome::sound(Cue::Blip, 600.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Verdict;
    use crate::palette::RED;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn drop_at(column: usize, y: f64) -> Drop {
        Drop {
            column,
            y,
            speed: drop_speed(1),
            color: RED,
        }
    }

    #[test]
    fn drops_fall_and_leave() {
        let mut drops: Vec<Drop> = vec![drop_at(3, 500.0), drop_at(1, 0.0), drop_at(2, 510.0)];
        assert_eq!(advance_drops(&mut drops, 512.0), 1);
        assert_eq!(drops.len(), 2);
        assert_eq!(drops[0].y, 502.5);
        assert_eq!(drops[1].y, 2.5);
    }

    #[test]
    fn catching_removes_the_block() {
        // 16 columns of 32 pixels
        let mut drops: Vec<Drop> = vec![drop_at(3, 100.0)];
        assert!(!catch(&mut drops, 96.0, 110.0, 32.0));
        assert!(!catch(&mut drops, 100.0, 140.0, 32.0));
        assert!(catch(&mut drops, 100.0, 110.0, 32.0));
        assert!(drops.is_empty());
        assert!(!catch(&mut drops, 100.0, 110.0, 32.0));
    }

    #[test]
    fn missed_drop_fails_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(6);
        let config: Config = Config::default();
        let mut board: Board = Board::new(16);
        board.aux = Aux::Rain {
            drops: vec![drop_at(3, config.canvas_size - 1.0)],
        };
        let outcomes: Vec<Outcome> = Rain.frame(&mut board, 1, &config, &mut rng);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].verdict, Some(Verdict::Failure("Missed drop!")));
        let Aux::Rain { drops } = &board.aux else {
            panic!("rain data expected");
        };
        assert!(drops.iter().all(|d| d.y < 0.0));
    }

    #[test]
    fn caught_drops_score() {
        let config: Config = Config::default();
        let mut board: Board = Board::new(16);
        board.aux = Aux::Rain {
            drops: vec![drop_at(0, 0.0)],
        };
        assert_eq!(Rain.pointer_hit(&mut board, 40.0, 5.0, &config), None);
        let outcome: Option<Outcome> = Rain.pointer_hit(&mut board, 5.0, 5.0, &config);
        assert_eq!(outcome.map(|o| o.points), Some(10));
    }

    #[test]
    fn tools_leave_the_canvas_alone() {
        let mut board: Board = Board::new(16);
        for tool in [Tool::Pencil, Tool::Bucket, Tool::Eraser] {
            assert_eq!(Rain.apply_tool(&mut board, tool, RED, 4, 4), Outcome::default());
        }
        assert_eq!(board.player.count_filled(), 0);
    }
}
