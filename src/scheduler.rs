/*
scheduler.rs

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

//! Delayed and repeating tasks.
//!
//! The [`Scheduler`] keeps a virtual clock in milliseconds that the session moves forward.
//! Tasks fire in the order of their due time, and in the order they were scheduled when they
//! are due at the same time.
//!
//! Every scheduled task gets a [`TaskId`].
//! Cancelling a task removes it from the queue, so a cancelled task never fires, even when it
//! was due during the same clock advance.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::palette::Color;

/// Work that the session performs when a task fires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Task {
    /// One second of the level countdown.
    Countdown,

    /// Show the given reveal of the sequence.
    SequenceFlash(usize),

    /// Hide the given reveal and put the previous cell color back.
    SequenceRestore {
        index: usize,
        previous: Option<Color>,
    },

    /// Hide the target (memory mode).
    HideTarget,

    /// Switch the canvas visibility (blind mode).
    ToggleVisibility,

    /// Let the virus grow by one cell.
    SpreadVirus,
}

/// Task request: when to run it and whether to repeat it.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Delay before the first run, in milliseconds.
    pub delay: u64,

    /// Interval between runs for repeating tasks.
    pub period: Option<u64>,

    pub task: Task,
}

impl Schedule {
    /// Run the task once, after `delay` milliseconds.
    pub fn once(delay: u64, task: Task) -> Self {
        Self {
            delay,
            period: None,
            task,
        }
    }

    /// Run the task every `period` milliseconds, starting `period` milliseconds from now.
    pub fn every(period: u64, task: Task) -> Self {
        Self {
            delay: period,
            period: Some(period),
            task,
        }
    }
}

/// Cancellation token.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Queued task.
#[derive(Debug, Clone)]
struct Entry {
    task: Task,
    period: Option<u64>,
}

/// Scheduler object.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Virtual clock.
    now: u64,

    /// Identifier of the next scheduled task.
    next_id: u64,

    /// Queued tasks ordered by due time and identifier.
    queue: BTreeMap<(u64, u64), Entry>,

    /// Due time of each queued task, indexed by the task identifier.
    due: HashMap<u64, u64>,
}

impl Scheduler {
    /// Create a [`Scheduler`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current time of the virtual clock.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Return the number of queued tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue a task and return its identifier.
    pub fn add(&mut self, schedule: Schedule) -> TaskId {
        let id: u64 = self.next_id;
        self.next_id += 1;
        let at: u64 = self.now.saturating_add(schedule.delay);
        self.queue.insert(
            (at, id),
            Entry {
                task: schedule.task,
                // A zero period would fire forever without the clock moving
                period: schedule.period.map(|p| p.max(1)),
            },
        );
        self.due.insert(id, at);
        TaskId(id)
    }

    /// Cancel a task. Return whether the task was still queued.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.due.remove(&id.0) {
            Some(at) => {
                self.queue.remove(&(at, id.0));
                true
            }
            None => false,
        }
    }

    /// Cancel all the queued tasks for which the predicate returns true, and return the number
    /// of cancelled tasks.
    pub fn cancel_matching<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Task) -> bool,
    {
        let keys: Vec<(u64, u64)> = self
            .queue
            .iter()
            .filter(|(_, entry)| predicate(&entry.task))
            .map(|(key, _)| *key)
            .collect();
        for key in &keys {
            self.queue.remove(key);
            self.due.remove(&key.1);
        }
        keys.len()
    }

    /// Cancel all the tasks.
    pub fn cancel_all(&mut self) {
        if !self.is_empty() {
            debug!("Cancelling {} scheduled tasks", self.len());
        }
        self.queue.clear();
        self.due.clear();
    }

    /// Remove and return the next task due at or before `until`, moving the clock to its due
    /// time.
    ///
    /// Repeating tasks are queued again for their next run, with the same identifier.
    /// Return None when no task is due; the clock is not moved in that case.
    pub fn pop_due(&mut self, until: u64) -> Option<(TaskId, Task)> {
        let (&(at, id), _) = self.queue.first_key_value()?;
        if at > until {
            return None;
        }
        let entry: Entry = self.queue.remove(&(at, id))?;
        self.now = self.now.max(at);
        // A repeat past the end of the clock never runs
        match entry.period.and_then(|period| at.checked_add(period)) {
            Some(next) => {
                self.queue.insert(
                    (next, id),
                    Entry {
                        task: entry.task.clone(),
                        period: entry.period,
                    },
                );
                self.due.insert(id, next);
            }
            None => {
                self.due.remove(&id);
            }
        }
        Some((TaskId(id), entry.task))
    }

    /// Move the clock forward to `time` without running anything.
    pub fn set_now(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler, until: u64) -> Vec<(u64, Task)> {
        let mut fired: Vec<(u64, Task)> = Vec::new();
        while let Some((_, task)) = s.pop_due(until) {
            fired.push((s.now(), task));
        }
        s.set_now(until);
        fired
    }

    #[test]
    fn fires_in_due_order() {
        let mut s: Scheduler = Scheduler::new();
        s.add(Schedule::once(300, Task::HideTarget));
        s.add(Schedule::once(100, Task::SequenceFlash(0)));
        s.add(Schedule::once(100, Task::SequenceFlash(1)));
        assert_eq!(
            drain(&mut s, 1000),
            vec![
                (100, Task::SequenceFlash(0)),
                (100, Task::SequenceFlash(1)),
                (300, Task::HideTarget),
            ]
        );
        assert!(s.is_empty());
        assert_eq!(s.now(), 1000);
    }

    #[test]
    fn repeating_tasks_keep_firing() {
        let mut s: Scheduler = Scheduler::new();
        let id: TaskId = s.add(Schedule::every(1000, Task::Countdown));
        assert_eq!(drain(&mut s, 999), vec![]);
        assert_eq!(drain(&mut s, 3500).len(), 3);
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert_eq!(drain(&mut s, 10_000), vec![]);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut s: Scheduler = Scheduler::new();
        let stale: TaskId = s.add(Schedule::once(500, Task::SequenceFlash(3)));
        s.add(Schedule::once(500, Task::HideTarget));
        s.add(Schedule::every(200, Task::ToggleVisibility));
        assert!(s.cancel(stale));
        assert_eq!(s.cancel_matching(|t| *t == Task::ToggleVisibility), 1);
        assert_eq!(drain(&mut s, 1000), vec![(500, Task::HideTarget)]);

        s.add(Schedule::once(10, Task::SpreadVirus));
        s.cancel_all();
        assert_eq!(drain(&mut s, 5000), vec![]);
    }

    #[test]
    fn delays_are_relative_to_the_clock() {
        let mut s: Scheduler = Scheduler::new();
        s.set_now(2000);
        s.add(Schedule::once(0, Task::SequenceFlash(0)));
        s.add(Schedule::once(50, Task::HideTarget));
        assert_eq!(drain(&mut s, 2000), vec![(2000, Task::SequenceFlash(0))]);
        assert_eq!(drain(&mut s, 2050), vec![(2050, Task::HideTarget)]);
    }

    #[test]
    fn clock_stops_at_its_maximum() {
        let mut s: Scheduler = Scheduler::new();
        s.set_now(u64::MAX - 5);
        s.add(Schedule::once(10, Task::HideTarget));
        s.add(Schedule::every(2, Task::Countdown));
        assert_eq!(s.len(), 2);
        assert_eq!(
            drain(&mut s, u64::MAX),
            vec![
                (u64::MAX - 3, Task::Countdown),
                (u64::MAX - 1, Task::Countdown),
                (u64::MAX, Task::HideTarget),
            ]
        );
        assert!(s.is_empty());
        assert_eq!(s.now(), u64::MAX);
    }
}
