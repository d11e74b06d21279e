//! Render boundary
//!
//! Each frame the loop hands a [`RenderRequest`] to a [`RenderSink`]. Drawing
//! pixels is the sink's business; the request is plain geometry and text.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::settings::Config;
use crate::sim::{GameState, Paddle, Scores, Side};

/// Width of a centre-line dash
const DIVIDER_WIDTH: u32 = 10;
/// First dash starts this far from the top
const DIVIDER_TOP: u32 = 10;
/// Dash height and spacing, as a fraction of field height
const DIVIDER_SEGMENTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.pos.x,
            y: paddle.pos.y,
            width: paddle.size.x,
            height: paddle.size.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Left paddle, then right
    pub paddles: [Rect; 2],
    pub ball: Circle,
    pub scores: Scores,
    /// Dashed centre line
    pub divider: Vec<Rect>,
    /// Winner text while a round is over
    pub banner: Option<String>,
}

impl RenderRequest {
    pub fn from_state(state: &GameState, config: &Config) -> Self {
        Self {
            paddles: [Rect::from(&state.left), Rect::from(&state.right)],
            ball: Circle {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
            },
            scores: state.scores,
            divider: divider(config),
            banner: state.round_winner().map(banner_text),
        }
    }
}

pub fn banner_text(winner: Side) -> String {
    format!("{} Player Won!", winner.as_str())
}

/// Centre-line dashes: one every `height / 20` from y = 10, skipping
/// odd-numbered starts
pub fn divider(config: &Config) -> Vec<Rect> {
    let field_height = config.field_height as u32;
    let step = (field_height / DIVIDER_SEGMENTS).max(1);
    let x = (config.field_width as u32 / 2) as f32 - (DIVIDER_WIDTH / 2) as f32;

    (DIVIDER_TOP..field_height)
        .step_by(step as usize)
        .filter(|y| y % 2 == 0)
        .map(|y| Rect {
            x,
            y: y as f32,
            width: DIVIDER_WIDTH as f32,
            height: step as f32,
        })
        .collect()
}

/// Whatever draws frames
pub trait RenderSink {
    fn draw(&mut self, request: &RenderRequest);
}

/// Collects frames in memory
impl RenderSink for Vec<RenderRequest> {
    fn draw(&mut self, request: &RenderRequest) {
        self.push(request.clone());
    }
}

/// Logs score changes and banners instead of drawing
#[derive(Debug, Default)]
pub struct LogSink {
    last_scores: Scores,
    last_banner: Option<String>,
    frames: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn draw(&mut self, request: &RenderRequest) {
        self.frames += 1;
        if request.scores != self.last_scores {
            log::info!("Score {} - {}", request.scores.left, request.scores.right);
            self.last_scores = request.scores;
        }
        if request.banner != self.last_banner {
            if let Some(banner) = &request.banner {
                log::info!("{}", banner);
            }
            self.last_banner = request.banner.clone();
        }
        log::trace!(
            "Frame {}: ball ({:.1}, {:.1})",
            self.frames,
            request.ball.x,
            request.ball.y
        );
    }
}

/// Writes one JSON object per frame
pub struct JsonLinesSink<W: Write> {
    writer: W,
    failures: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, failures: 0 }
    }

    /// Frames that could not be written
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn draw(&mut self, request: &RenderRequest) {
        let result = serde_json::to_writer(&mut self.writer, request)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if let Err(e) = result {
            self.failures += 1;
            log::warn!("Frame write error: {}", e);
        }
    }
}

/// Draws to two sinks in turn
pub struct Tee<A, B>(pub A, pub B);

impl<A: RenderSink, B: RenderSink> RenderSink for Tee<A, B> {
    fn draw(&mut self, request: &RenderRequest) {
        self.0.draw(request);
        self.1.draw(request);
    }
}
