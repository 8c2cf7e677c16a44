/*
session.rs

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

//! Manage a game session.
//!
//! A [`Session`] runs the levels of one mode until the player runs out of lives.
//! The host application drives it:
//!
//! * [`Session::apply_action`] and [`Session::catch_drop`] for pointer presses,
//! * [`Session::check_solution`] when the player submits the canvas,
//! * [`Session::advance`] to move the virtual clock forward (countdown and mode tasks),
//! * [`Session::frame`] once per display frame.
//!
//! These methods return the [`Transition`] objects that happened during the call.
//! The same information, plus sounds and HUD updates, is published through the
//! [`EventSender`] object.

use log::{debug, info};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::events::{Cue, EventSender, GameEvent, Report, Sound};
use crate::generator::Generated;
use crate::grid::Grid;
use crate::level::{Aux, Board};
use crate::modes::{Mode, Outcome, Rules, TimeoutPolicy, Tool, Verdict};
use crate::palette::{BLACK, Color};
use crate::scheduler::{Schedule, Scheduler, Task, TaskId};

/// Milliseconds between two countdown ticks.
const COUNTDOWN_TICK_MS: u64 = 1000;

/// Session states.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// The session has not started yet.
    #[default]
    Idle,
    Playing,

    /// The player has no lives left. Only [`Session::start`] leaves this state.
    GameOver,
}

/// Change in the session that a player action or the clock caused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The level was solved. The next level has already started.
    LevelCleared { level: u32, points: u32 },

    /// The player lost a life.
    Failed { reason: &'static str, lives: u32 },

    GameOver(Report),
}

/// Errors for the requests that the session cannot process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The request needs a session in progress.
    NotPlaying,

    /// The color is not one of the swatches of the mode.
    ColorNotInPalette(Color),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::NotPlaying => write!(f, "no game in progress"),
            SessionError::ColorNotInPalette(color) => {
                write!(f, "color {color} is not available in this mode")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Read-only view of the session for the front ends.
#[derive(Serialize, Debug)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub state: State,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub time_remaining: u32,
    pub tool: Tool,
    pub color: Color,
    pub palette: &'static [Color],
    pub board: &'a Board,
}

/// Game session.
pub struct Session {
    config: Config,

    /// Random source for level generation and mode tasks.
    rng: Box<dyn RngCore>,

    events: EventSender,

    /// Countdown and mode tasks.
    scheduler: Scheduler,

    /// Identifier of the running countdown. There is at most one.
    countdown: Option<TaskId>,

    mode: Mode,

    /// Rules of the mode, selected when the session starts.
    rules: &'static dyn Rules,

    state: State,
    level: u32,
    score: u32,
    lives: u32,

    /// Seconds left in the level.
    time_remaining: u32,

    board: Board,

    /// Selected tool.
    tool: Tool,

    /// Selected color.
    color: Color,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("level", &self.level)
            .field("score", &self.score)
            .field("lives", &self.lives)
            .field("time_remaining", &self.time_remaining)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a [`Session`] object.
    ///
    /// The session uses the thread-local random generator and does not publish events. Use
    /// [`Session::with_rng`] and [`Session::with_events`] to change that.
    pub fn new(config: Config) -> Self {
        let mode: Mode = Mode::default();
        let lives: u32 = config.starting_lives;
        Self {
            config,
            rng: Box::new(rand::rng()),
            events: EventSender::disconnected(),
            scheduler: Scheduler::new(),
            countdown: None,
            mode,
            rules: mode.rules(),
            state: State::Idle,
            level: 1,
            score: 0,
            lives,
            time_remaining: 0,
            board: Board::default(),
            tool: Tool::default(),
            color: first_color(mode.rules()),
        }
    }

    /// Use the given random source.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Publish the events through the given sender.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = events;
        self
    }

    /// Start a new game in the given mode, at level 1.
    ///
    /// Starting again while a game is in progress abandons that game.
    pub fn start(&mut self, mode: Mode) -> Vec<Transition> {
        info!("Starting a new game in {mode} mode");
        self.scheduler.cancel_all();
        self.countdown = None;
        self.mode = mode;
        self.rules = mode.rules();
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.state = State::Playing;
        self.tool = Tool::default();
        self.color = first_color(self.rules);

        let mut transitions: Vec<Transition> = Vec::new();
        self.advance_level(&mut transitions);
        transitions
    }

    /// Build the current level and start its tasks.
    fn advance_level(&mut self, transitions: &mut Vec<Transition>) {
        let rules: &'static dyn Rules = self.rules;
        let level: u32 = self.level;
        let size: usize = rules.grid_size(level);

        let generated: Generated = rules.generate(level, size, &mut *self.rng);
        self.board = Board {
            player: Grid::new(size),
            target: generated.target,
            aux: generated.aux,
        };
        rules.init_player_grid(&mut self.board, level, &mut *self.rng);

        // Nothing from the previous level survives
        self.scheduler.cancel_all();
        self.countdown = None;
        let budget: Option<u32> = rules.time_budget(level);
        self.time_remaining = budget.unwrap_or(0);
        if budget.is_some() {
            self.restart_countdown();
        }
        for schedule in rules.level_tasks(level, &self.config) {
            self.scheduler.add(schedule);
        }
        info!(
            "Level {level}: {size}x{size} grid, {} target cells, {:?}s",
            self.board.target.count_filled(),
            budget
        );

        self.events.send(GameEvent::LevelStarted { level, size });
        self.events.sound(Sound::new(Cue::LevelUp, 600.0));
        self.publish_hud();

        // Tasks without delay, such as the first reveal of a sequence
        self.run_due(0, transitions);
    }

    /// Cancel the countdown, if any, and start a new one.
    fn restart_countdown(&mut self) {
        if let Some(id) = self.countdown.take() {
            self.scheduler.cancel(id);
        }
        self.countdown = Some(
            self.scheduler
                .add(Schedule::every(COUNTDOWN_TICK_MS, Task::Countdown)),
        );
    }

    /// Apply the selected tool to a cell.
    ///
    /// Actions out of the grid, or while no game is in progress, are ignored.
    pub fn apply_action(&mut self, x: usize, y: usize) -> Vec<Transition> {
        let mut transitions: Vec<Transition> = Vec::new();
        if self.state != State::Playing || !self.board.player.in_bounds(x, y) {
            return transitions;
        }
        let outcome: Outcome = self
            .rules
            .apply_tool(&mut self.board, self.tool, self.color, x, y);
        self.apply_outcome(outcome, &mut transitions);
        transitions
    }

    /// Compare the player's canvas with the target.
    ///
    /// Modes that end their levels on events ignore the request.
    pub fn check_solution(&mut self) -> Vec<Transition> {
        let mut transitions: Vec<Transition> = Vec::new();
        if self.state != State::Playing {
            return transitions;
        }
        match self
            .rules
            .check_win(&self.board.player, &self.board.target)
        {
            Some(true) => self.on_success(&mut transitions),
            Some(false) => self.on_failure("Incorrect!", &mut transitions),
            None => debug!("No solution to check in {} mode", self.mode),
        }
        transitions
    }

    /// Move the clock forward and run the tasks that become due.
    pub fn advance(&mut self, ms: u64) -> Vec<Transition> {
        let mut transitions: Vec<Transition> = Vec::new();
        if self.state == State::Playing {
            self.run_due(ms, &mut transitions);
        }
        transitions
    }

    /// Run the tasks due in the next `ms` milliseconds, in order.
    fn run_due(&mut self, ms: u64, transitions: &mut Vec<Transition>) {
        let until: u64 = self.scheduler.now().saturating_add(ms);
        while self.state == State::Playing {
            let Some((_, task)) = self.scheduler.pop_due(until) else {
                break;
            };
            if task == Task::Countdown {
                self.tick(transitions);
            } else {
                let outcome: Outcome =
                    self.rules
                        .run_task(&mut self.board, &task, &self.config, &mut *self.rng);
                self.apply_outcome(outcome, transitions);
            }
        }
        self.scheduler.set_now(until);
    }

    /// One second of the countdown.
    fn tick(&mut self, transitions: &mut Vec<Transition>) {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.publish_hud();
        if self.time_remaining == 0 {
            self.on_timer_expiry(transitions);
        }
    }

    /// Update the moving parts of the level for a new display frame.
    pub fn frame(&mut self) -> Vec<Transition> {
        let mut transitions: Vec<Transition> = Vec::new();
        if self.state != State::Playing {
            return transitions;
        }
        let outcomes: Vec<Outcome> =
            self.rules
                .frame(&mut self.board, self.level, &self.config, &mut *self.rng);
        for outcome in outcomes {
            if self.state != State::Playing {
                break;
            }
            self.apply_outcome(outcome, &mut transitions);
        }
        transitions
    }

    /// Try to catch a falling block at the given canvas pixel.
    ///
    /// Return None when no block is under the pointer.
    pub fn catch_drop(&mut self, px: f64, py: f64) -> Option<Vec<Transition>> {
        if self.state != State::Playing {
            return None;
        }
        let outcome: Outcome = self
            .rules
            .pointer_hit(&mut self.board, px, py, &self.config)?;
        let mut transitions: Vec<Transition> = Vec::new();
        self.apply_outcome(outcome, &mut transitions);
        Some(transitions)
    }

    /// Play the sound, add the points, schedule the tasks, and end the level if needed.
    fn apply_outcome(&mut self, outcome: Outcome, transitions: &mut Vec<Transition>) {
        if let Some(sound) = outcome.sound {
            self.events.sound(sound);
        }
        if outcome.points > 0 {
            self.score += outcome.points;
            self.publish_hud();
        }
        for schedule in outcome.follow_up {
            self.scheduler.add(schedule);
        }
        match outcome.verdict {
            Some(Verdict::Success) => self.on_success(transitions),
            Some(Verdict::Failure(reason)) => self.on_failure(reason, transitions),
            None => (),
        }
    }

    /// Score the level and start the next one.
    fn on_success(&mut self, transitions: &mut Vec<Transition>) {
        let level: u32 = self.level;
        let points: u32 = 100 + 10 * self.time_remaining;
        self.score += points;
        info!("Level {level} cleared: {points} points, score {}", self.score);

        self.events.sound(Sound::new(Cue::Success, 800.0));
        self.events.send(GameEvent::LevelCleared { level, points });
        transitions.push(Transition::LevelCleared { level, points });

        self.level += 1;
        self.advance_level(transitions);
    }

    /// Remove a life. The level continues with a fresh countdown while lives remain.
    fn on_failure(&mut self, reason: &'static str, transitions: &mut Vec<Transition>) {
        self.lives = self.lives.saturating_sub(1);
        info!("{reason} {} lives left", self.lives);

        self.events.sound(Sound::new(Cue::Fail, 100.0));
        self.events.send(GameEvent::Failed {
            reason: reason.to_string(),
            lives: self.lives,
        });
        transitions.push(Transition::Failed {
            reason,
            lives: self.lives,
        });

        if self.lives == 0 {
            self.game_over(transitions);
            return;
        }

        self.time_remaining = self.config.failure_time;
        self.restart_countdown();
        for schedule in self.rules.on_failure(&mut self.board, &self.config) {
            self.scheduler
                .cancel_matching(|task: &Task| *task == schedule.task);
            self.scheduler.add(schedule);
        }
        self.publish_hud();
    }

    /// The countdown reached zero.
    fn on_timer_expiry(&mut self, transitions: &mut Vec<Transition>) {
        match self.rules.timeout_policy() {
            TimeoutPolicy::Succeed => self.on_success(transitions),
            TimeoutPolicy::Fail => self.on_failure("Time's up!", transitions),
        }
    }

    /// Stop everything and publish the final report.
    fn game_over(&mut self, transitions: &mut Vec<Transition>) {
        self.state = State::GameOver;
        self.scheduler.cancel_all();
        self.countdown = None;

        let report: Report = Report {
            mode: self.mode,
            level: self.level,
            score: self.score,
        };
        info!(
            "Game over: {} mode, level {}, score {}",
            report.mode, report.level, report.score
        );
        self.events.sound(Sound::new(Cue::GameOver, 50.0));
        self.events.send(GameEvent::GameOver(report));
        transitions.push(Transition::GameOver(report));
    }

    fn publish_hud(&self) {
        self.events.send(GameEvent::Hud {
            score: self.score,
            time_remaining: self.time_remaining,
            lives: self.lives,
        });
    }

    /// Select the drawing tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.events.sound(Sound::new(Cue::Blip, 300.0));
    }

    /// Select the drawing color. The color must be one of the swatches of the mode.
    pub fn select_color(&mut self, color: Color) -> Result<(), SessionError> {
        if self.state != State::Playing {
            return Err(SessionError::NotPlaying);
        }
        if !self.rules.palette().contains(&color) {
            return Err(SessionError::ColorNotInPalette(color));
        }
        self.color = color;
        self.events.sound(Sound::new(Cue::Blip, 400.0));
        Ok(())
    }

    /// Return the cell under the given canvas pixel, or None outside of the grid.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<(usize, usize)> {
        let size: usize = self.board.size();
        if size == 0 || !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        let cell_size: f64 = self.config.canvas_size / size as f64;
        let x: usize = (px / cell_size).floor() as usize;
        let y: usize = (py / cell_size).floor() as usize;
        self.board.player.in_bounds(x, y).then_some((x, y))
    }

    /// Return a view of the session for the render and HUD front ends.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            state: self.state,
            level: self.level,
            score: self.score,
            lives: self.lives,
            time_remaining: self.time_remaining,
            tool: self.tool,
            color: self.color,
            palette: self.rules.palette(),
            board: &self.board,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Return the swatches of the mode.
    pub fn palette(&self) -> &'static [Color] {
        self.rules.palette()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return the virtual clock, in milliseconds since the session was created.
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Whether the target is shown to the player. Only the memory mode hides it.
    pub fn target_visible(&self) -> bool {
        !matches!(
            self.board.aux,
            Aux::Memory {
                target_visible: false
            }
        )
    }

    /// Whether the player's canvas is shown. Only the blind mode hides it.
    pub fn canvas_visible(&self) -> bool {
        !matches!(self.board.aux, Aux::Blind { visible: false })
    }
}

/// Default color of a mode.
fn first_color(rules: &dyn Rules) -> Color {
    rules.palette().first().copied().unwrap_or(BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Drop;
    use crate::palette::{CYAN, RED, STANDARD, STONE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(seed: u64) -> Session {
        Session::default().with_rng(StdRng::seed_from_u64(seed))
    }

    /// Color of the only target pixel in [`classic`].
    const TARGET: Color = STANDARD[8];

    /// Start a classic game with a known target.
    fn classic(seed: u64) -> Session {
        let mut s: Session = session(seed);
        s.start(Mode::Classic);
        s.board.target = Grid::new(8);
        s.board.target.set(2, 2, Some(TARGET));
        s
    }

    #[test]
    fn three_failures_end_the_game() {
        let mut s: Session = classic(1);
        assert_eq!(s.state(), State::Playing);
        assert_eq!(s.lives(), 3);

        assert_eq!(
            s.check_solution(),
            vec![Transition::Failed {
                reason: "Incorrect!",
                lives: 2
            }]
        );
        assert_eq!(s.time_remaining(), 15);
        s.check_solution();
        let last: Vec<Transition> = s.check_solution();
        assert_eq!(
            last,
            vec![
                Transition::Failed {
                    reason: "Incorrect!",
                    lives: 0
                },
                Transition::GameOver(Report {
                    mode: Mode::Classic,
                    level: 1,
                    score: 0
                })
            ]
        );
        assert_eq!(s.state(), State::GameOver);
        assert!(s.scheduler.is_empty());

        // Nothing happens after the end of the game
        assert!(s.check_solution().is_empty());
        assert!(s.apply_action(0, 0).is_empty());
        assert!(s.advance(100_000).is_empty());
    }

    #[test]
    fn success_does_not_restore_lives() {
        let mut s: Session = classic(2);
        s.check_solution();
        s.check_solution();
        assert_eq!(s.lives(), 1);

        s.select_color(TARGET).unwrap();
        s.apply_action(2, 2);
        assert_eq!(
            s.check_solution(),
            vec![Transition::LevelCleared {
                level: 1,
                points: 250
            }]
        );
        assert_eq!(s.lives(), 1);
        assert_eq!(s.level(), 2);
        assert_eq!(s.score(), 250);
        assert_eq!(s.board().player.count_filled(), 0);
    }

    #[test]
    fn red_target_needs_cyan() {
        let mut s: Session = session(3);
        s.start(Mode::Negative);
        s.board.target = Grid::new(8);
        s.board.target.set(0, 0, Some(RED));

        s.select_color(RED).unwrap();
        s.apply_action(0, 0);
        assert_eq!(s.check_solution().len(), 1);
        assert_eq!(s.lives(), 2);

        s.select_color(CYAN).unwrap();
        s.apply_action(0, 0);
        assert!(matches!(
            s.check_solution().as_slice(),
            [Transition::LevelCleared { level: 1, .. }]
        ));
    }

    #[test]
    fn missed_drop_costs_a_life() {
        let mut s: Session = session(4);
        s.start(Mode::Rain);
        let canvas: f64 = s.config().canvas_size;
        s.board.aux = Aux::Rain {
            drops: vec![Drop {
                column: 3,
                y: canvas - 1.0,
                speed: 2.5,
                color: RED,
            }],
        };
        assert_eq!(
            s.frame(),
            vec![Transition::Failed {
                reason: "Missed drop!",
                lives: 2
            }]
        );
    }

    #[test]
    fn caught_drop_scores() {
        let mut s: Session = session(5);
        s.start(Mode::Rain);
        s.board.aux = Aux::Rain {
            drops: vec![Drop {
                column: 0,
                y: 0.0,
                speed: 2.5,
                color: RED,
            }],
        };
        assert_eq!(s.catch_drop(100.0, 10.0), None);
        assert_eq!(s.catch_drop(10.0, 10.0), Some(vec![]));
        assert_eq!(s.score(), 10);
        assert_eq!(s.catch_drop(10.0, 10.0), None);

        // Missing a block does not paint the canvas
        assert!(s.apply_action(0, 0).is_empty());
        assert_eq!(s.board().player.count_filled(), 0);
    }

    #[test]
    fn time_runs_out() {
        let mut s: Session = classic(6);
        assert_eq!(s.time_remaining(), 43);
        assert!(s.advance(42_999).is_empty());
        assert_eq!(s.time_remaining(), 1);
        assert_eq!(
            s.advance(1),
            vec![Transition::Failed {
                reason: "Time's up!",
                lives: 2
            }]
        );
        assert_eq!(s.time_remaining(), 15);
        s.advance(15_000);
        assert_eq!(s.lives(), 1);
    }

    #[test]
    fn clock_saturates() {
        let mut s: Session = session(9);
        s.start(Mode::Creative);
        assert!(s.advance(10).is_empty());
        assert!(s.advance(u64::MAX).is_empty());
        assert_eq!(s.now(), u64::MAX);
        assert!(s.advance(1000).is_empty());
        assert_eq!(s.now(), u64::MAX);
        assert_eq!(s.state(), State::Playing);
    }

    #[test]
    fn surviving_rain_clears_the_level() {
        let mut s: Session = session(7);
        s.start(Mode::Rain);
        assert_eq!(s.time_remaining(), 60);
        assert_eq!(
            s.advance(60_000),
            vec![Transition::LevelCleared {
                level: 1,
                points: 100
            }]
        );
        assert_eq!(s.level(), 2);
        assert_eq!(s.time_remaining(), 60);
    }

    #[test]
    fn surviving_virus_clears_the_level() {
        let mut s: Session = session(8);
        s.start(Mode::Virus);
        assert_eq!(s.board().player.count_filled(), 1);
        s.advance(10_000);
        assert!(s.board().player.count_filled() > 1);
        assert_eq!(
            s.advance(50_000),
            vec![Transition::LevelCleared {
                level: 1,
                points: 100
            }]
        );
        assert_eq!(s.board().player.count_filled(), 1);
    }

    #[test]
    fn hunter_clicks() {
        let mut s: Session = session(9);
        s.start(Mode::Hunter);
        let Aux::Hunter { target: (x, y) } = s.board().aux else {
            panic!("hunter data expected");
        };
        assert_eq!(
            s.apply_action((x + 1) % 8, (y + 1) % 8),
            vec![Transition::Failed {
                reason: "Wrong pixel!",
                lives: 2
            }]
        );
        s.select_tool(Tool::Bucket);
        assert!(matches!(
            s.apply_action(x, y).as_slice(),
            [Transition::LevelCleared { level: 1, .. }]
        ));
    }

    #[test]
    fn sequence_is_shown_then_repeated() {
        let mut s: Session = session(10);
        s.start(Mode::Sequence);
        let Aux::Sequence(state) = &s.board().aux else {
            panic!("sequence data expected");
        };
        let pattern = state.pattern.clone();
        assert_eq!(pattern.len(), 4);
        assert!(state.showing);
        // The first reveal lights up right away
        assert_eq!(s.board().player.get(pattern[0].x, pattern[0].y), Some(pattern[0].color));

        // Clicks are ignored while the sequence plays
        assert!(s.apply_action(pattern[1].x, pattern[1].y).is_empty());

        s.advance(4 * 800);
        assert!(matches!(&s.board().aux, Aux::Sequence(state) if !state.showing));
        assert_eq!(s.board().player.count_filled(), 0);

        for reveal in &pattern[..3] {
            assert!(s.apply_action(reveal.x, reveal.y).is_empty());
        }
        assert!(matches!(
            s.apply_action(pattern[3].x, pattern[3].y).as_slice(),
            [Transition::LevelCleared { level: 1, .. }]
        ));
    }

    #[test]
    fn memory_target_comes_back_after_failure() {
        let mut s: Session = session(11);
        s.start(Mode::Memory);
        assert!(s.target_visible());
        s.advance(3000);
        assert!(!s.target_visible());

        s.board.target.set(0, 0, Some(RED));
        s.check_solution();
        assert!(s.target_visible());
        s.advance(1499);
        assert!(s.target_visible());
        s.advance(1);
        assert!(!s.target_visible());
    }

    #[test]
    fn blind_canvas_blinks() {
        let mut s: Session = session(12);
        s.start(Mode::Blind);
        assert!(s.canvas_visible());
        s.advance(2000);
        assert!(!s.canvas_visible());
        s.advance(2000);
        assert!(s.canvas_visible());
    }

    #[test]
    fn colors_come_from_the_palette() {
        let mut s: Session = session(13);
        assert_eq!(s.select_color(RED), Err(SessionError::NotPlaying));
        s.start(Mode::Sculptor);
        assert_eq!(s.color(), STONE);
        assert_eq!(
            s.select_color(RED),
            Err(SessionError::ColorNotInPalette(RED))
        );
        assert_eq!(s.select_color(STONE), Ok(()));
    }

    #[test]
    fn pointer_mapping() {
        let mut s: Session = session(14);
        assert_eq!(s.cell_at(10.0, 10.0), None);
        s.start(Mode::Classic);
        assert_eq!(s.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(s.cell_at(100.0, 200.0), Some((1, 3)));
        assert_eq!(s.cell_at(511.9, 511.9), Some((7, 7)));
        assert_eq!(s.cell_at(512.0, 0.0), None);
        assert_eq!(s.cell_at(-0.5, 10.0), None);
        assert_eq!(s.cell_at(f64::NAN, 10.0), None);
    }

    #[test]
    fn events_are_published() {
        let (sender, receiver) = async_channel::unbounded::<GameEvent>();
        let mut s: Session = session(15).with_events(EventSender::new(sender));
        s.start(Mode::Creative);
        let events: Vec<GameEvent> = std::iter::from_fn(|| receiver.try_recv().ok()).collect();
        assert_eq!(
            events,
            vec![
                GameEvent::LevelStarted { level: 1, size: 32 },
                GameEvent::Sound(Sound::new(Cue::LevelUp, 600.0)),
                GameEvent::Hud {
                    score: 0,
                    time_remaining: 0,
                    lives: 3
                },
            ]
        );

        // Creative mode has no countdown and nothing to check
        assert!(s.advance(600_000).is_empty());
        assert!(s.check_solution().is_empty());
        assert_eq!(s.state(), State::Playing);
    }

    #[test]
    fn snapshot_serializes() {
        let mut s: Session = session(16);
        s.start(Mode::Defusal);
        let json: serde_json::Value = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["mode"], "defusal");
        assert_eq!(json["state"], "playing");
        assert_eq!(json["lives"], 3);
        assert_eq!(json["board"]["player"]["size"], 8);
    }
}
