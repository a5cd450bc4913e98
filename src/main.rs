//! NumberCrush terminal runner (default binary).
//!
//! Owns the terminal: raw mode, the alternate screen and the event loop.
//! Everything else lives in [`tui_crush::app::App`].

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_crush::app::{App, Flow};
use tui_crush::input::{handle_key_event, should_quit};
use tui_crush::settings::{SettingsStore, DEFAULT_SETTINGS_FILE};
use tui_crush::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Log file written when `TUI_CRUSH_LOG` is set.
const LOG_FILE: &str = "tui-crush.log";
const LOG_ENV: &str = "TUI_CRUSH_LOG";

#[derive(Debug, Parser)]
#[command(name = "tui-crush")]
#[command(about = "NumberCrush: swap candies, line up three or more, chain cascades")]
struct Args {
    /// Settings file (created with defaults if missing)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Seed for the candy generator (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let store = SettingsStore::load_or_create(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, config = %args.config.display(), "starting");

    let mut app = App::new(store, seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut screen = app.screen();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if app.handle_action(action) == Flow::Quit {
                        return Ok(());
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }

        // A new page redraws from scratch.
        if app.screen() != screen {
            screen = app.screen();
            term.invalidate();
        }
    }
}

/// Install a file logger when `TUI_CRUSH_LOG` is set. The terminal belongs to
/// the renderer, so nothing is ever logged to stdout or stderr.
fn init_logging() -> Result<()> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let filter = if directives.trim().is_empty() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_new(&directives).with_context(|| format!("parsing {}", LOG_ENV))?
    };

    let file = File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
