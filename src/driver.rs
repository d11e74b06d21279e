//! Fixed-rate simulation loop
//!
//! Owns the match and its collaborators. One `step` is one frame: read the
//! input frame, advance the simulation (or the round-over hold), draw.

use std::thread;
use std::time::{Duration, Instant};

use crate::input::InputSource;
use crate::render::{RenderRequest, RenderSink};
use crate::settings::Config;
use crate::sim::{GameEvent, GameState, advance_hold, tick};

/// Overruns longer than this many intervals get a warning
const MAX_LAG_TICKS: u32 = 3;

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Sleeps so that successive `wait` calls are one interval apart
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    /// Deadline of the previous frame
    last: Instant,
    /// When the previous `wait` returned
    woke: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            last: now,
            woke: now,
        }
    }

    /// Block until the next frame is due; returns real time since the
    /// previous call
    pub fn wait(&mut self) -> Duration {
        let target = self.last + self.interval;
        let now = Instant::now();
        if now < target {
            thread::sleep(target - now);
        } else if now - target > self.interval * MAX_LAG_TICKS {
            log::warn!(
                "Frame overran by {:?} (interval {:?})",
                now - target,
                self.interval
            );
        }

        // Stay on the schedule; after a stall, restart it from now
        let now = Instant::now();
        let elapsed = now - self.woke;
        self.woke = now;
        self.last = now
            .checked_sub(self.interval)
            .map_or(target, |floor| target.max(floor));
        elapsed
    }
}

/// Drives a match from an input source to a render sink
pub struct SimulationLoop<I, R> {
    config: Config,
    state: GameState,
    input: I,
    sink: R,
    /// Events from the most recent step
    events: Vec<GameEvent>,
}

impl<I: InputSource, R: RenderSink> SimulationLoop<I, R> {
    pub fn new(config: Config, input: I, sink: R) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            input,
            sink,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for setting up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_parts(self) -> (GameState, I, R) {
        (self.state, self.input, self.sink)
    }

    /// Run one frame.
    ///
    /// While playing: poll input, tick, draw. During the round-over hold the
    /// paddle keys are ignored and `elapsed` is taken off the hold instead.
    /// A quit signal lets the current frame finish and be drawn.
    pub fn step(&mut self, elapsed: Duration) -> LoopControl {
        let frame = self.input.poll();
        if frame.quit {
            log::info!("Quit requested at tick {}", self.state.time_ticks);
        }

        self.events.clear();
        if self.state.is_playing() {
            self.events = tick(&mut self.state, &frame.input, &self.config);
        } else if let Some(event) = advance_hold(&mut self.state, elapsed) {
            self.events.push(event);
        }

        for event in &self.events {
            log::debug!("Tick {}: {:?}", self.state.time_ticks, event);
        }

        self.sink
            .draw(&RenderRequest::from_state(&self.state, &self.config));

        if frame.quit {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    /// Run up to `frames` steps back to back, each counted as one tick
    /// interval. Returns how many ran.
    pub fn run_for(&mut self, frames: u64) -> u64 {
        let interval = self.config.tick_interval();
        for ran in 1..=frames {
            if self.step(interval) == LoopControl::Quit {
                return ran;
            }
        }
        frames
    }

    /// Run paced at the tick rate until the input source asks to quit
    pub fn run(&mut self) -> u64 {
        let mut pacer = FramePacer::new(self.config.tick_interval());
        let mut frames = 0;
        log::info!("Running at {} Hz", self.config.tick_rate);
        loop {
            let elapsed = pacer.wait();
            frames += 1;
            if self.step(elapsed) == LoopControl::Quit {
                return frames;
            }
        }
    }
}
