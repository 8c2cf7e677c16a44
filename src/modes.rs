/*
modes.rs

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

//! Game modes and their rules.
//!
//! A [`Mode`] selects a [`Rules`] object with [`Mode::rules`].
//! The session picks the rules once, when it starts, and then asks them how to:
//!
//! * generate the target of a level ([`Rules::generate`]),
//! * prepare the player's canvas ([`Rules::init_player_grid`]),
//! * apply a tool to a cell ([`Rules::apply_tool`]),
//! * verify the player's canvas ([`Rules::check_win`]).
//!
//! Rules also define the grid size, the time budget, and what happens when the time runs out.
//! Modes that evolve over time (virus, rain, sequence, memory, blind) schedule tasks with
//! [`Rules::level_tasks`] and run them with [`Rules::run_task`], or update the board on every
//! display frame with [`Rules::frame`].
//!
//! Rules objects are stateless: everything they act upon is in the [`Board`] object that the
//! session passes to them.

pub mod colormix;
pub mod creative;
pub mod defusal;
pub mod hunter;
pub mod kaleidoscope;
pub mod negative;
pub mod palette_swap;
pub mod rain;
pub mod sculptor;
pub mod sequence;
pub mod symmetric;
pub mod virus;

use clap::ValueEnum;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use crate::config::Config;
use crate::events::{Cue, Sound};
use crate::generator::{Generated, symmetric as symmetric_pattern};
use crate::grid::Grid;
use crate::level::Board;
use crate::palette::{Color, STANDARD};
use crate::scheduler::{Schedule, Task};

/// Game modes.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Mode {
    /// Free drawing on a large canvas.
    Creative,
    /// Reproduce the target.
    #[default]
    Classic,
    /// Only the left half of the target is shown.
    Mirror,
    /// The target is shown rotated from time to time.
    Rotation,
    /// The target is shown in black.
    Silhouette,
    /// The target disappears after a few seconds.
    Memory,
    /// The canvas is only visible around the pointer.
    Flashlight,
    #[value(name = "1-bit")]
    #[serde(rename = "1-bit")]
    OneBit,
    Picross,
    /// Mix primary colors to obtain the target's secondary colors.
    Colormix,
    /// Paint the complementary color of each target cell.
    Negative,
    /// Carve the shape of the target out of a stone block.
    Sculptor,
    /// Remove the noise from a copy of the target.
    Defusal,
    /// Contain a spreading infection until the time runs out.
    Virus,
    /// Catch the falling blocks until the time runs out.
    Rain,
    /// Find the odd pixel.
    Hunter,
    /// Repeat a sequence of cells.
    Sequence,
    /// Every stroke is mirrored in the four quarters of the canvas.
    Kaleidoscope,
    /// The canvas blinks in and out of sight.
    Blind,
    /// Swatches paint another color than the one they show.
    PaletteSwap,
}

impl Mode {
    /// Return all the modes.
    pub fn all() -> Vec<Mode> {
        (0u8..).map_while(Mode::from_repr).collect()
    }

    /// Return the mode's name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Creative => "creative",
            Mode::Classic => "classic",
            Mode::Mirror => "mirror",
            Mode::Rotation => "rotation",
            Mode::Silhouette => "silhouette",
            Mode::Memory => "memory",
            Mode::Flashlight => "flashlight",
            Mode::OneBit => "1-bit",
            Mode::Picross => "picross",
            Mode::Colormix => "colormix",
            Mode::Negative => "negative",
            Mode::Sculptor => "sculptor",
            Mode::Defusal => "defusal",
            Mode::Virus => "virus",
            Mode::Rain => "rain",
            Mode::Hunter => "hunter",
            Mode::Sequence => "sequence",
            Mode::Kaleidoscope => "kaleidoscope",
            Mode::Blind => "blind",
            Mode::PaletteSwap => "palette-swap",
        }
    }

    /// Return the rules of the mode.
    pub fn rules(self) -> &'static dyn Rules {
        match self {
            Mode::Creative => &creative::Creative,
            Mode::Memory => &symmetric::Memory,
            Mode::Blind => &symmetric::Blind,
            Mode::Colormix => &colormix::Colormix,
            Mode::Negative => &negative::Negative,
            Mode::Sculptor => &sculptor::Sculptor,
            Mode::Defusal => &defusal::Defusal,
            Mode::Virus => &virus::Virus,
            Mode::Rain => &rain::Rain,
            Mode::Hunter => &hunter::Hunter,
            Mode::Sequence => &sequence::Sequence,
            Mode::Kaleidoscope => &kaleidoscope::Kaleidoscope,
            Mode::PaletteSwap => &palette_swap::PaletteSwap,
            Mode::Classic => &symmetric::Symmetric(Mode::Classic),
            Mode::Mirror => &symmetric::Symmetric(Mode::Mirror),
            Mode::Rotation => &symmetric::Symmetric(Mode::Rotation),
            Mode::Silhouette => &symmetric::Symmetric(Mode::Silhouette),
            Mode::Flashlight => &symmetric::Symmetric(Mode::Flashlight),
            Mode::OneBit => &symmetric::Symmetric(Mode::OneBit),
            Mode::Picross => &symmetric::Symmetric(Mode::Picross),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, PartialEq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown mode {:?}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::all()
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Drawing tools.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Bucket,
}

/// Result of a level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Success,

    /// Failure, with the reason shown to the player.
    Failure(&'static str),
}

/// What happens when the countdown reaches zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Construction modes: the player ran out of time.
    Fail,

    /// Reflex modes: the player survived.
    Succeed,
}

/// Consequences of a player action or of a task, which the session applies.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Outcome {
    /// Audio feedback.
    pub sound: Option<Sound>,

    /// Bonus points.
    pub points: u32,

    /// Tasks to schedule.
    pub follow_up: Vec<Schedule>,

    /// End of the level.
    pub verdict: Option<Verdict>,
}

impl Outcome {
    /// Outcome with only audio feedback.
    pub fn sound(cue: Cue, pitch: f32) -> Self {
        Self {
            sound: Some(Sound::new(cue, pitch)),
            ..Default::default()
        }
    }

    pub fn success() -> Self {
        Self {
            verdict: Some(Verdict::Success),
            ..Default::default()
        }
    }

    pub fn failure(reason: &'static str) -> Self {
        Self {
            verdict: Some(Verdict::Failure(reason)),
            ..Default::default()
        }
    }

    /// Add a task to schedule.
    pub fn then(mut self, schedule: Schedule) -> Self {
        self.follow_up.push(schedule);
        self
    }
}

/// Grid size for the modes that grow with the level.
pub fn tiered_grid_size(level: u32) -> usize {
    match level {
        0..=3 => 8,
        4..=6 => 10,
        _ => 16,
    }
}

/// Seconds given for a level of a construction mode.
pub fn standard_time_budget(level: u32) -> u32 {
    45u32.saturating_sub(2 * level).max(15)
}

/// Pencil, eraser, and bucket, as they work in most modes.
pub fn apply_standard(board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
    match tool {
        Tool::Pencil => {
            // Painting a cell with its current color does nothing, not even a sound
            if board.player.set(x, y, Some(color)) {
                Outcome::sound(Cue::Draw, draw_pitch(y))
            } else {
                Outcome::default()
            }
        }
        Tool::Eraser => {
            board.player.set(x, y, None);
            Outcome::default()
        }
        Tool::Bucket => {
            board.player.flood_fill(x, y, Some(color));
            Outcome::sound(Cue::PowerUp, 300.0)
        }
    }
}

/// Pitch of the drawing sound, which rises from the top to the bottom of the canvas.
pub fn draw_pitch(y: usize) -> f32 {
    200.0 + 20.0 * y as f32
}

/// Cell-wise equality of the two grids. Empty cells must be empty in both grids.
pub fn exact_match(player: &Grid, target: &Grid) -> bool {
    player.size() == target.size()
        && player
            .iter()
            .zip(target.iter())
            .all(|((_, _, p), (_, _, t))| p == t)
}

/// Behavior of a game mode.
///
/// The default methods implement the standard matching game: a symmetric target, an empty
/// canvas, standard tools, and an exact match.
pub trait Rules {
    /// Return the mode that these rules implement.
    fn mode(&self) -> Mode;

    /// Return the number of rows and columns for the given level.
    fn grid_size(&self, level: u32) -> usize {
        tiered_grid_size(level)
    }

    /// Return the colors that the player can select.
    fn palette(&self) -> &'static [Color] {
        &STANDARD
    }

    /// Return the number of seconds for the level, or None for untimed modes.
    fn time_budget(&self, level: u32) -> Option<u32> {
        Some(standard_time_budget(level))
    }

    fn timeout_policy(&self) -> TimeoutPolicy {
        TimeoutPolicy::Fail
    }

    /// Build the target and the mode-specific data of a level.
    fn generate(&self, level: u32, size: usize, rng: &mut dyn RngCore) -> Generated {
        Generated::with_target(symmetric_pattern::generate(size, level, rng))
    }

    /// Prepare the player's canvas. The board's player grid is empty when this method is called.
    fn init_player_grid(&self, _board: &mut Board, _level: u32, _rng: &mut dyn RngCore) {}

    /// Apply a tool to a cell. The coordinates are inside the grid.
    fn apply_tool(&self, board: &mut Board, tool: Tool, color: Color, x: usize, y: usize) -> Outcome {
        apply_standard(board, tool, color, x, y)
    }

    /// Verify the player's canvas against the target.
    ///
    /// Return None for the modes where the level ends on events instead of on request.
    fn check_win(&self, player: &Grid, target: &Grid) -> Option<bool> {
        Some(exact_match(player, target))
    }

    /// Return the tasks to schedule when a level starts.
    fn level_tasks(&self, _level: u32, _config: &Config) -> Vec<Schedule> {
        Vec::new()
    }

    /// Run a scheduled task.
    fn run_task(
        &self,
        _board: &mut Board,
        _task: &Task,
        _config: &Config,
        _rng: &mut dyn RngCore,
    ) -> Outcome {
        Outcome::default()
    }

    /// Update the board after a failure that did not end the game, and return the tasks to
    /// schedule. Pending tasks identical to the returned ones are cancelled first.
    fn on_failure(&self, _board: &mut Board, _config: &Config) -> Vec<Schedule> {
        Vec::new()
    }

    /// Update the board for a new display frame.
    fn frame(
        &self,
        _board: &mut Board,
        _level: u32,
        _config: &Config,
        _rng: &mut dyn RngCore,
    ) -> Vec<Outcome> {
        Vec::new()
    }

    /// Process a pointer press at the given canvas pixel, for the modes that hit-test moving
    /// objects instead of cells. Return None when nothing was hit.
    fn pointer_hit(&self, _board: &mut Board, _px: f64, _py: f64, _config: &Config) -> Option<Outcome> {
        None
    }
}
