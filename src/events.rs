/*
events.rs

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

//! Notifications for the audio and HUD front ends.
//!
//! The session publishes [`GameEvent`] objects in an [`async_channel`] channel.
//! Publishing never blocks: if nobody listens, or if the receiving side is gone, the event is
//! dropped and the game continues without sound or HUD refresh.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::modes::Mode;

/// Audio cues.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Draw,
    Blip,
    Success,
    Fail,
    LevelUp,
    PowerUp,
    GameOver,
}

/// Audio cue with its pitch (frequency in Hz).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Sound {
    pub cue: Cue,
    pub pitch: f32,
}

impl Sound {
    pub fn new(cue: Cue, pitch: f32) -> Self {
        Self { cue, pitch }
    }
}

/// Final results of a session.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    pub level: u32,
    pub score: u32,
}

/// Events published by the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(Sound),

    /// Values to display in the HUD.
    Hud {
        score: u32,
        time_remaining: u32,
        lives: u32,
    },

    LevelStarted {
        level: u32,
        size: usize,
    },

    LevelCleared {
        level: u32,
        points: u32,
    },

    Failed {
        reason: String,
        lives: u32,
    },

    GameOver(Report),
}

/// Sending side of the event channel.
#[derive(Debug, Clone, Default)]
pub struct EventSender {
    sender: Option<async_channel::Sender<GameEvent>>,
}

impl EventSender {
    /// Create an [`EventSender`] object that publishes to the given channel.
    pub fn new(sender: async_channel::Sender<GameEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create an [`EventSender`] object that drops all the events.
    pub fn disconnected() -> Self {
        Self { sender: None }
    }

    /// Publish an event without waiting.
    pub fn send(&self, event: GameEvent) {
        if let Some(sender) = &self.sender
            && let Err(e) = sender.try_send(event)
        {
            debug!("Event dropped: {e}");
        }
    }

    /// Publish an audio cue.
    pub fn sound(&self, sound: Sound) {
        self.send(GameEvent::Sound(sound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_the_receiver() {
        let (sender, receiver) = async_channel::unbounded::<GameEvent>();
        let events: EventSender = EventSender::new(sender);
        events.sound(Sound::new(Cue::Blip, 400.0));
        assert_eq!(
            receiver.try_recv(),
            Ok(GameEvent::Sound(Sound::new(Cue::Blip, 400.0)))
        );
    }

    #[test]
    fn closed_channels_are_ignored() {
        let (sender, receiver) = async_channel::bounded::<GameEvent>(1);
        drop(receiver);
        let events: EventSender = EventSender::new(sender);
        events.sound(Sound::new(Cue::Fail, 100.0));
        EventSender::disconnected().sound(Sound::new(Cue::Fail, 100.0));
    }

    #[test]
    fn cue_names() {
        assert_eq!(serde_json::to_string(&Cue::LevelUp).unwrap(), "\"levelup\"");
        assert_eq!(serde_json::to_string(&Cue::PowerUp).unwrap(), "\"powerup\"");
    }
}
