//! Terminal snake runner (default binary).
//!
//! Drives the engine at a fixed frame rate: render, poll input until the next
//! frame is due, then advance the logic clock. Rendering goes through the
//! framebuffer renderer (no widget toolkit).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameConfig, GameEngine, GameSnapshot, SimpleRng};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(name = "tui-snake")]
#[command(version, about = "Snake in the terminal")]
struct Args {
    /// TOML file with grid_width / grid_height / logic_hz
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in tiles (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Board height in tiles (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Logic updates per second (overrides the config file)
    #[arg(long)]
    hz: Option<f64>,

    /// RNG seed; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs here. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(hz) = self.hz {
            config.logic_hz = hz;
        }
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tui_snake=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut game = GameEngine::new(config, SimpleRng::new(seed)).context("invalid game config")?;
    info!(seed, config = ?game.config(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(%err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameEngine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let start = Instant::now();
    let mut next_frame = start;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        next_frame += frame;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Don't try to catch up on frames lost to a stall.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        game.tick(now.duration_since(start).as_millis() as u64);
    }
}
