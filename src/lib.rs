/*
lib.rs

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

//! Pixel-art puzzle engine.
//!
//! The player paints cells of a square canvas to reproduce, transform, or defend a pattern.
//! Twenty [`modes::Mode`] variants change how the target is built, how the tools behave, and
//! how a level is won or lost.
//!
//! The engine has no user interface. A front end creates a [`session::Session`] object,
//! forwards the pointer presses and the clock to it, reads [`session::Session::snapshot`] to
//! draw the grids, and listens to the [`events::GameEvent`] objects for sounds and HUD updates.
//!
//! ```
//! use pixeles::config::Config;
//! use pixeles::modes::Mode;
//! use pixeles::session::{Session, State};
//!
//! let mut session: Session = Session::new(Config::default());
//! session.start(Mode::Classic);
//! if let Some((x, y)) = session.cell_at(100.0, 40.0) {
//!     session.apply_action(x, y);
//! }
//! session.advance(1000);
//! assert_eq!(session.state(), State::Playing);
//! ```

pub mod config;
pub mod events;
pub mod generator;
pub mod grid;
pub mod level;
pub mod modes;
pub mod palette;
pub mod scheduler;
pub mod session;

/// Text displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";
