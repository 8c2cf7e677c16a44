/*
config.rs

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

//! Engine settings.
//!
//! The settings can be read from a JSON file.
//! Missing fields take their default value, so the file only needs to list the settings to
//! change:
//!
//! ```json
//! { "canvas_size": 640.0, "starting_lives": 5 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Width and height of the player's canvas in pixels. Used for pointer mapping and for the
    /// falling blocks of the rain mode.
    pub canvas_size: f64,

    /// Lives at the beginning of a session.
    pub starting_lives: u32,

    /// Seconds given to the player after a failure.
    pub failure_time: u32,

    /// How long the target stays visible when a memory level starts.
    pub memory_peek_ms: u64,

    /// How long the target is shown again after a failure in the memory mode.
    pub memory_repeek_ms: u64,

    /// Interval between two visibility changes in the blind mode.
    pub blind_toggle_ms: u64,

    /// Shortest interval between two virus spreads.
    pub virus_min_interval_ms: u64,

    /// How long each reveal of the sequence mode is shown.
    pub sequence_flash_ms: u64,

    /// Pause between two reveals of the sequence mode.
    pub sequence_gap_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 512.0,
            starting_lives: 3,
            failure_time: 15,
            memory_peek_ms: 3000,
            memory_repeek_ms: 1500,
            blind_toggle_ms: 2000,
            virus_min_interval_ms: 100,
            sequence_flash_ms: 500,
            sequence_gap_ms: 300,
        }
    }
}

impl Config {
    /// Read the settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Interval between two virus spreads for the given level.
    pub fn virus_interval(&self, level: u32) -> u64 {
        1000u64
            .saturating_sub(50 * u64::from(level))
            .max(self.virus_min_interval_ms)
    }
}
