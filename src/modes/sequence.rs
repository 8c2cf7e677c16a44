/*
sequence.rs

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

//! Sequence mode.
//!
//! When the level starts, the cells of the sequence light up one after the other on the
//! player's canvas: each cell shows its color for a short time, and then gets its previous
//! color back before the next one lights up.
//! Once the sequence has been shown, the player clicks the cells in the same order.
//! Each correct click paints the cell. The first wrong click fails the level.

use log::debug;
use rand::RngCore;

use crate::config::Config;
use crate::events::Cue;
use crate::generator::{Generated, sequence};
use crate::grid::Grid;
use crate::level::{Aux, Board, SequenceState};
use crate::palette::Color;
use crate::scheduler::{Schedule, Task};

use super::{Mode, Outcome, Rules, Tool, Verdict};

pub struct Sequence;

/// Pitch of the sound that plays when the nth cell lights up.
fn flash_pitch(index: usize) -> f32 {
    400.0 + 100.0 * index as f32
}

impl Rules for Sequence {
    fn mode(&self) -> Mode {
        Mode::Sequence
    }

    fn generate(&self, level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated {
            target: Grid::new(size),
            aux: Aux::Sequence(SequenceState {
                pattern: sequence::generate(size, level, rng),
                index: 0,
                showing: true,
            }),
        }
    }

    fn check_win(&self, _player: &Grid, _target: &Grid) -> Option<bool> {
        None
    }

    fn level_tasks(&self, _level: u32, _config: &Config) -> Vec<Schedule> {
        vec![Schedule::once(0, Task::SequenceFlash(0))]
    }

    fn run_task(
        &self,
        board: &mut Board,
        task: &Task,
        config: &Config,
        _rng: &mut dyn RngCore,
    ) -> Outcome {
        let Aux::Sequence(state) = &mut board.aux else {
            return Outcome::default();
        };
        match *task {
            Task::SequenceFlash(index) => {
                let Some(reveal) = state.pattern.get(index).copied() else {
                    debug!("End of the sequence, waiting for the player");
                    state.showing = false;
                    state.index = 0;
                    return Outcome::default();
                };
                let previous: Option<Color> = board.player.get(reveal.x, reveal.y);
                board.player.set(reveal.x, reveal.y, Some(reveal.color));
                Outcome::sound(Cue::Blip, flash_pitch(index)).then(Schedule::once(
                    config.sequence_flash_ms,
                    Task::SequenceRestore { index, previous },
                ))
            }
            Task::SequenceRestore { index, previous } => {
                if let Some(reveal) = state.pattern.get(index) {
                    board.player.set(reveal.x, reveal.y, previous);
                }
                state.index = index + 1;
                Outcome::default().then(Schedule::once(
                    config.sequence_gap_ms,
                    Task::SequenceFlash(index + 1),
                ))
            }
            _ => Outcome::default(),
        }
    }

    fn apply_tool(&self, board: &mut Board, _tool: Tool, _color: Color, x: usize, y: usize) -> Outcome {
        let Aux::Sequence(state) = &mut board.aux else {
            return Outcome::default();
        };
        if state.showing {
            return Outcome::default();
        }
        let Some(expected) = state.pattern.get(state.index).copied() else {
            return Outcome::default();
        };
        if (expected.x, expected.y) != (x, y) {
            debug!("Expected {expected:?}, got ({x}, {y})");
            return Outcome::failure("Wrong sequence!");
        }

        board.player.set(x, y, Some(expected.color));
        state.index += 1;
        if state.index == state.pattern.len() {
            Outcome {
                verdict: Some(Verdict::Success),
                ..Outcome::sound(Cue::Blip, 600.0)
            }
        } else {
            Outcome::sound(Cue::Blip, 600.0)
        }
    }
}
