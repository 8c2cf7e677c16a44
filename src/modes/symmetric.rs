/*
symmetric.rs

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

//! Modes where the player reproduces a symmetric target.
//!
//! Mirror, rotation, silhouette, flashlight, 1-bit, and picross only differ by how the front
//! end draws the target or the canvas, so they share the [`Symmetric`] rules.
//! The memory and blind modes also change visibility flags over time.

use log::debug;
use rand::RngCore;

use crate::config::Config;
use crate::events::Cue;
use crate::generator::{Generated, symmetric};
use crate::level::{Aux, Board};
use crate::scheduler::{Schedule, Task};

use super::{Mode, Outcome, Rules};

/// Rules of the matching modes without any twist in the game logic.
pub struct Symmetric(pub Mode);

impl Rules for Symmetric {
    fn mode(&self) -> Mode {
        self.0
    }
}

/// The target is visible for a few seconds only.
pub struct Memory;

impl Rules for Memory {
    fn mode(&self) -> Mode {
        Mode::Memory
    }

    fn generate(&self, level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: symmetric::generate(size, level, rng),
            aux: Aux::Memory {
                target_visible: true,
            },
        }
    }

    fn level_tasks(&self, _level: u32, config: &Config) -> Vec<Schedule> {
        vec![Schedule::once(config.memory_peek_ms, Task::HideTarget)]
    }

    fn run_task(
        &self,
        board: &mut Board,
        task: &Task,
        _config: &Config,
        _rng: &mut dyn RngCore,
    ) -> Outcome {
        match (task, &mut board.aux) {
            (Task::HideTarget, Aux::Memory { target_visible }) => {
                debug!("Hiding the target");
                *target_visible = false;
                Outcome::sound(Cue::Blip, 100.0)
            }
            _ => Outcome::default(),
        }
    }

    /// Show the target again for a short time.
    fn on_failure(&self, board: &mut Board, config: &Config) -> Vec<Schedule> {
        if let Aux::Memory { target_visible } = &mut board.aux {
            *target_visible = true;
        }
        vec![Schedule::once(config.memory_repeek_ms, Task::HideTarget)]
    }
}

/// The canvas blinks.
pub struct Blind;

impl Rules for Blind {
    fn mode(&self) -> Mode {
        Mode::Blind
    }

    fn generate(&self, level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: symmetric::generate(size, level, rng),
            aux: Aux::Blind { visible: true },
        }
    }

    fn level_tasks(&self, _level: u32, config: &Config) -> Vec<Schedule> {
        vec![Schedule::every(config.blind_toggle_ms, Task::ToggleVisibility)]
    }

    fn run_task(
        &self,
        board: &mut Board,
        task: &Task,
        _config: &Config,
        _rng: &mut dyn RngCore,
    ) -> Outcome {
        if let (Task::ToggleVisibility, Aux::Blind { visible }) = (task, &mut board.aux) {
            *visible = !*visible;
        }
        Outcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn memory_hides_and_shows_the_target() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let config: Config = Config::default();
        let generated: Generated = Memory.generate(1, 8, &mut rng);
        let mut board: Board = Board {
            player: crate::grid::Grid::new(8),
            target: generated.target,
            aux: generated.aux,
        };
        assert_eq!(
            Memory.level_tasks(1, &config),
            vec![Schedule::once(3000, Task::HideTarget)]
        );

        Memory.run_task(&mut board, &Task::HideTarget, &config, &mut rng);
        assert_eq!(
            board.aux,
            Aux::Memory {
                target_visible: false
            }
        );

        let again: Vec<Schedule> = Memory.on_failure(&mut board, &config);
        assert_eq!(again, vec![Schedule::once(1500, Task::HideTarget)]);
        assert_eq!(
            board.aux,
            Aux::Memory {
                target_visible: true
            }
        );
    }

    #[test]
    fn blind_toggles() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let config: Config = Config::default();
        let mut board: Board = Board::new(8);
        board.aux = Blind.generate(1, 8, &mut rng).aux;
        Blind.run_task(&mut board, &Task::ToggleVisibility, &config, &mut rng);
        assert_eq!(board.aux, Aux::Blind { visible: false });
        Blind.run_task(&mut board, &Task::ToggleVisibility, &config, &mut rng);
        assert_eq!(board.aux, Aux::Blind { visible: true });
    }
}
