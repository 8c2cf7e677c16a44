/*
virus.rs

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

//! Virus mode.
//!
//! An infection starts in the middle of the canvas and grows at regular intervals, faster at
//! each level.
//! The player paints over infected cells to contain it, and wins by holding until the time runs
//! out.
//! The level fails when more than half of the canvas is infected.

use log::debug;
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::events::Cue;
use crate::generator::Generated;
use crate::grid::Grid;
use crate::level::Board;
use crate::palette::VIRUS;
use crate::scheduler::{Schedule, Task};

use super::{Mode, Outcome, Rules, TimeoutPolicy};

const SIZE: usize = 16;
const DURATION_SEC: u32 = 60;

/// Down, up, right, left. Rows grow downward.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub struct Virus;

/// Infect a neighbor of a random infected cell.
///
/// Return the number of infected cells before the spread, and whether a new cell got infected.
pub fn spread(grid: &mut Grid, rng: &mut dyn RngCore) -> (usize, bool) {
    let infected: Vec<(usize, usize)> = grid.positions_of(VIRUS);
    if infected.is_empty() {
        return (0, false);
    }
    let (sx, sy) = infected[rng.random_range(0..infected.len())];
    let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
    let spread: bool = match (sx.checked_add_signed(dx), sy.checked_add_signed(dy)) {
        (Some(nx), Some(ny)) if grid.in_bounds(nx, ny) => {
            grid.set(nx, ny, Some(VIRUS));
            true
        }
        _ => false,
    };
    (infected.len(), spread)
}

impl Rules for Virus {
    fn mode(&self) -> Mode {
        Mode::Virus
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
        Generated::empty(size)
    }

    fn init_player_grid(&self, board: &mut Board, _level: u32, _rng: &mut dyn RngCore) {
        let center: usize = board.size() / 2;
        board.player.set(center, center, Some(VIRUS));
    }

    fn check_win(&self, _player: &Grid, _target: &Grid) -> Option<bool> {
        None
    }

    fn level_tasks(&self, level: u32, config: &Config) -> Vec<Schedule> {
        let interval: u64 = config.virus_interval(level);
        debug!("Virus spreads every {interval}ms");
        vec![Schedule::every(interval, Task::SpreadVirus)]
    }

    fn run_task(
        &self,
        board: &mut Board,
        task: &Task,
        _config: &Config,
        rng: &mut dyn RngCore,
    ) -> Outcome {
        if *task != Task::SpreadVirus {
            return Outcome::default();
        }
        let (infected, spread) = spread(&mut board.player, rng);
        let size: usize = board.size();
        if infected * 2 > size * size {
            debug!("{infected} infected cells out of {}", size * size);
            return Outcome::failure("Infection Critical!");
        }
        if spread {
            Outcome::sound(Cue::Blip, 100.0)
        } else {
            Outcome::default()
        }
    }
}
