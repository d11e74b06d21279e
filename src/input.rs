//! Input boundary
//!
//! The simulation only ever sees a [`TickInput`] plus a quit flag. Whatever
//! polls the real devices implements [`InputSource`].

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// What an input source reports once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub input: TickInput,
    /// Stop after this tick
    pub quit: bool,
}

/// Anything that can be polled for the current input frame
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Physical keys the default layout uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    I,
    K,
}

/// Physical key for each logical paddle key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::Up,
            right_down: Key::Down,
        }
    }
}

impl KeyBindings {
    /// Sample the logical keys from whatever reports physical key state
    pub fn snapshot(&self, is_held: impl Fn(Key) -> bool) -> TickInput {
        TickInput {
            left_up: is_held(self.left_up),
            left_down: is_held(self.left_down),
            right_up: is_held(self.right_up),
            right_down: is_held(self.right_down),
        }
    }
}

/// Held-key tracker fed by a windowing layer's press/release events
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    bindings: KeyBindings,
    held: HashSet<Key>,
    quit: bool,
}

impl Keyboard {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            quit: false,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Latch the quit signal; it stays set once requested
    pub fn request_quit(&mut self) {
        self.quit = true;
    }
}

impl InputSource for Keyboard {
    fn poll(&mut self) -> InputFrame {
        InputFrame {
            input: self.bindings.snapshot(|key| self.held.contains(&key)),
            quit: self.quit,
        }
    }
}

/// Replays a fixed list of frames, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
    /// Report quit once the script is used up, instead of idling forever
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// No keys, never quits
    pub fn idle() -> Self {
        Self::default()
    }

    /// Parse a JSON array of frames
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let frames: Vec<InputFrame> = serde_json::from_str(json)?;
        Ok(Self::new(frames))
    }

    pub fn quit_when_done(mut self, quit: bool) -> Self {
        self.quit_when_done = quit;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or(InputFrame {
            input: TickInput::default(),
            quit: self.quit_when_done,
        })
    }
}
