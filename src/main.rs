//! Brick Breaker entry point
//!
//! Headless frame driver: samples key states from a built-in autopilot,
//! advances the simulation one tick per frame, and optionally paces frames
//! in real time and streams JSON snapshots for an external renderer.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use brick_breaker::sim::{GamePhase, GameState, Snapshot, TickInput, tick};
use brick_breaker::{LogAudio, Settings};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Run the brick breaker simulation headless")]
struct Args {
    /// Seed for brick layout and serve directions
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop after this many frames
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// JSON settings file (omitted fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sleep between frames to hold the configured frame rate
    #[arg(long)]
    realtime: bool,

    /// Print one JSON snapshot per frame to stdout
    #[arg(long)]
    snapshots: bool,

    /// Games to restart after a win or loss before quitting
    #[arg(long, default_value_t = 0)]
    restarts: u32,
}

/// Chases the lowest ball and presses restart/quit when a game ends
struct Autopilot {
    restarts_left: u32,
}

impl Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        if state.phase != GamePhase::Playing {
            if self.restarts_left > 0 {
                self.restarts_left -= 1;
                return TickInput {
                    restart: true,
                    ..Default::default()
                };
            }
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        // Prefer the lowest falling ball, else the lowest ball at all
        let lowest = |falling_only: bool| {
            state
                .balls
                .iter()
                .filter(move |b| !falling_only || b.vel.y > 0.0)
                .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()))
        };
        let target = lowest(true)
            .or_else(|| lowest(false))
            .map(|b| b.rect.center().x);

        let bat_x = state.bat.rect.center().x;
        let dead_zone = state.bat.speed;
        match target {
            Some(x) if x < bat_x - dead_zone => TickInput {
                move_left: true,
                ..Default::default()
            },
            Some(x) if x > bat_x + dead_zone => TickInput {
                move_right: true,
                ..Default::default()
            },
            _ => TickInput::default(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::from_json_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => {
            let settings = Settings::default();
            settings.validate().context("default settings")?;
            settings
        }
    };

    log::info!("Brick Breaker starting with seed {}", args.seed);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(settings.screen.fps));
    let mut state = GameState::with_seed(settings, args.seed);
    let mut audio = LogAudio::new();
    let mut pilot = Autopilot {
        restarts_left: args.restarts,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut last_phase = state.phase;

    for _ in 0..args.frames {
        let started = Instant::now();

        let input = pilot.sample(&state);
        if input.quit {
            break;
        }
        tick(&mut state, &input, &mut audio);

        if state.phase != last_phase {
            log::info!("Phase {:?} -> {:?}", last_phase, state.phase);
            last_phase = state.phase;
        }

        if args.snapshots {
            let snapshot = Snapshot::capture(&state);
            serde_json::to_writer(&mut out, &snapshot).context("writing snapshot")?;
            writeln!(out).context("writing snapshot")?;
        }

        if args.realtime {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let summary = Snapshot::capture(&state);
    log::info!(
        "Stopped at frame {} in {:?}: {}",
        summary.frame,
        summary.phase,
        summary.hud_line()
    );
    if !args.snapshots {
        println!("{}", summary.hud_line());
    }

    Ok(())
}
