//! Duel Pong entry point
//!
//! Runs a match headless: input comes from a script (or nobody touches the
//! keys), frames go to the log and optionally to a JSON-lines file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use duel_pong::input::ScriptedInput;
use duel_pong::render::{JsonLinesSink, LogSink, RenderSink, Tee};
use duel_pong::{Config, SimulationLoop};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to run (ignored with --realtime)
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// JSON array of input frames to replay
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write every frame as a JSON line to this file
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Pace frames at the tick rate and run until the script quits
    #[arg(long)]
    realtime: bool,

    /// Write the default config to this path and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        Config::default()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::default(),
    };

    let input = match &args.script {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?;
            ScriptedInput::from_json(&json)
                .with_context(|| format!("parsing script {}", path.display()))?
                .quit_when_done(args.realtime)
        }
        None => ScriptedInput::idle(),
    };

    log::info!("Duel Pong (headless) starting...");
    match &args.frames {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating frame file {}", path.display()))?;
            let sink = Tee(LogSink::new(), JsonLinesSink::new(BufWriter::new(file)));
            let Tee(_, frames) = play(config, input, sink, &args);
            if frames.failures() > 0 {
                log::warn!("{} frames could not be written", frames.failures());
            }
            frames
                .into_inner()
                .flush()
                .with_context(|| format!("flushing frame file {}", path.display()))?;
        }
        None => {
            play(config, input, LogSink::new(), &args);
        }
    }

    Ok(())
}

fn play<R: RenderSink>(config: Config, input: ScriptedInput, sink: R, args: &Args) -> R {
    let mut sim = SimulationLoop::new(config, input, sink);
    let frames = if args.realtime {
        sim.run()
    } else {
        sim.run_for(args.ticks)
    };

    let state = sim.state();
    log::info!(
        "Stopped after {} frames: {} ticks, {} rounds, score {} - {}",
        frames,
        state.time_ticks,
        state.rounds,
        state.scores.left,
        state.scores.right
    );
    let (_, _, sink) = sim.into_parts();
    sink
}
