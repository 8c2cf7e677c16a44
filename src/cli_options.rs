/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line gives access to the engine without a front end, for developers tuning the
//! generators and the game rules.
//!
//! # Examples
//!
//! List the available modes:
//!
//! ```
//! $ pixeles --ls
//! creative
//! classic
//! mirror
//! ...
//! ```
//!
//! Print two levels of the negative mode at level 5. Each color is shown as a letter, and empty
//! cells as dots. The target is on the left, the initial canvas on the right:
//!
//! ```
//! $ pixeles -m negative -l 5 -c 2
//! ```
//!
//! Play a sequence game for 20 seconds without a player, and print the events:
//!
//! ```
//! $ pixeles -m sequence --simulate --seconds 20 --seed 42
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use pixeles::COPYRIGHT_NOTICE;
use pixeles::config::Config;
use pixeles::events::{EventSender, GameEvent};
use pixeles::generator::Generated;
use pixeles::grid::Grid;
use pixeles::level::{Aux, Board};
use pixeles::modes::{Mode, Rules};
use pixeles::palette::Color;
use pixeles::session::{Session, State};

/// Simulated display refresh.
const FRAME_MS: u64 = 16;

/// Interval between two simulated pointer presses.
const PRESS_MS: u64 = 500;

/// Generate Pixeles levels and run headless games.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the game modes
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Game mode of the levels to generate or of the game to simulate
    #[arg(value_enum, short, long)]
    mode: Option<Mode>,

    /// Level to generate
    #[arg(short, long, default_value_t = 1, requires = "mode")]
    level: u32,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1, requires = "mode")]
    count: usize,

    /// Print the levels or the events in JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Run a game without player input, and print the events
    #[arg(long, default_value_t = false, requires = "mode")]
    simulate: bool,

    /// Duration of the simulated game
    #[arg(long, default_value_t = 30, requires = "simulate")]
    seconds: u64,

    /// Seed for the random generator, to reproduce a run
    #[arg(long)]
    seed: Option<u64>,

    /// Print some statistics at the end
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// JSON file with the engine settings
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse and process command-line options. Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the modes
    //
    if args.ls {
        for mode in Mode::all() {
            println!("{mode}");
        }
        return 0;
    }

    let Some(mode) = args.mode else {
        eprintln!("No game mode. Use --ls to list the available modes.");
        return 1;
    };

    let config: Config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Cannot read the configuration from {}: {e}", path.display());
                return 1;
            }
        },
        None => Config::default(),
    };

    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.simulate {
        simulate(mode, &args, config, rng)
    } else {
        print_levels(mode, &args, rng)
    }
}

/// Generate levels and print their target and initial canvas.
fn print_levels(mode: Mode, args: &Args, mut rng: StdRng) -> u8 {
    let rules: &dyn Rules = mode.rules();
    let level: u32 = args.level;
    let start: Instant = Instant::now();

    let mut boards: Vec<Board> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Iteration {i}");
        let size: usize = rules.grid_size(level);
        let generated: Generated = rules.generate(level, size, &mut rng);
        let mut board: Board = Board {
            player: Grid::new(size),
            target: generated.target,
            aux: generated.aux,
        };
        rules.init_player_grid(&mut board, level, &mut rng);
        boards.push(board);
    }
    let duration: Duration = start.elapsed();

    if args.json {
        match serde_json::to_string_pretty(&boards) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Cannot serialize the levels: {e}");
                return 1;
            }
        }
    } else {
        for board in &boards {
            print_board(mode, level, board);
        }
    }

    if args.summary {
        let count: usize = boards.len().max(1);
        let target_cells: usize = boards.iter().map(|b| b.target.count_filled()).sum();
        let player_cells: usize = boards.iter().map(|b| b.player.count_filled()).sum();
        println!(
            "
           total time = {}s
         average time = {}s
 average target cells = {}
average initial cells = {}",
            duration.as_secs_f32(),
            duration.as_secs_f32() / count as f32,
            target_cells as f32 / count as f32,
            player_cells as f32 / count as f32,
        );
    }
    0
}

/// Print the target and the canvas side by side, with one letter per color.
fn print_board(mode: Mode, level: u32, board: &Board) {
    let letters: BTreeMap<Color, char> = legend(&[&board.target, &board.player]);
    let size: usize = board.size();

    println!("\n{mode} level {level} ({size}x{size})");
    for y in 0..size {
        let target: String = row_text(&board.target, y, &letters);
        let player: String = row_text(&board.player, y, &letters);
        println!("{target}   {player}");
    }
    for (color, letter) in &letters {
        println!("{letter} {color}");
    }

    match &board.aux {
        Aux::None => (),
        Aux::Hunter { target } => println!("odd pixel at {target:?}"),
        Aux::Sequence(state) => {
            for (i, reveal) in state.pattern.iter().enumerate() {
                println!("{:>2}. ({}, {}) {}", i + 1, reveal.x, reveal.y, reveal.color);
            }
        }
        Aux::PaletteSwap { map } => {
            for (shown, painted) in map {
                println!("{shown} -> {painted}");
            }
        }
        aux => println!("{aux:?}"),
    }
}

/// Give a letter to each color used in the grids.
fn legend(grids: &[&Grid]) -> BTreeMap<Color, char> {
    let mut letters: BTreeMap<Color, char> = BTreeMap::new();
    let mut available = ('A'..='Z').chain('a'..='z');
    for grid in grids {
        for (_, _, cell) in grid.iter() {
            if let Some(color) = cell
                && !letters.contains_key(&color)
            {
                letters.insert(color, available.next().unwrap_or('?'));
            }
        }
    }
    letters
}

fn row_text(grid: &Grid, y: usize, letters: &BTreeMap<Color, char>) -> String {
    grid.row(y)
        .iter()
        .map(|cell| match cell {
            Some(color) => letters.get(color).copied().unwrap_or('?'),
            None => '.',
        })
        .collect()
}

/// Run a game with random pointer presses, and print the events.
fn simulate(mode: Mode, args: &Args, config: Config, mut rng: StdRng) -> u8 {
    let (sender, receiver) = async_channel::unbounded::<GameEvent>();
    let mut player: StdRng = StdRng::from_rng(&mut rng);
    let canvas_size: f64 = config.canvas_size;
    let mut session: Session = Session::new(config)
        .with_rng(rng)
        .with_events(EventSender::new(sender));

    session.start(mode);
    let end: u64 = args.seconds * 1000;
    let mut elapsed: u64 = 0;
    let mut next_press: u64 = PRESS_MS;
    let mut event_count: usize = 0;

    loop {
        while let Ok(event) = receiver.try_recv() {
            event_count += 1;
            if args.json {
                match serde_json::to_string(&event) {
                    Ok(json) => println!("{json}"),
                    Err(e) => debug!("Cannot serialize {event:?}: {e}"),
                }
            } else {
                println!("{elapsed:>7}ms {event:?}");
            }
        }
        if elapsed >= end || session.state() != State::Playing {
            break;
        }

        session.frame();
        if elapsed >= next_press {
            next_press += PRESS_MS;
            let px: f64 = player.random_range(0.0..=canvas_size);
            let py: f64 = player.random_range(0.0..=canvas_size);
            if session.catch_drop(px, py).is_none()
                && let Some((x, y)) = session.cell_at(px, py)
            {
                session.apply_action(x, y);
            }
        }
        session.advance(FRAME_MS);
        elapsed += FRAME_MS;
    }

    if args.summary {
        println!(
            "
  mode = {}
 level = {}
 score = {}
 lives = {}
events = {}",
            session.mode(),
            session.level(),
            session.score(),
            session.lives(),
            event_count
        );
    }
    0
}
