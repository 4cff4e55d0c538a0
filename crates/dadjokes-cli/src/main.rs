//! `dadjokes` — a joke of the day in your terminal.
//!
//! # Usage
//!
//! ```
//! dadjokes
//! dadjokes --catalog ~/jokes.toml --seed 7
//! dadjokes --print
//! ```

mod app;
mod settings;
mod ui;

use std::{
  fs::OpenOptions,
  io::{self, Write},
  path::{Path, PathBuf},
  sync::Mutex,
  time::{Duration, Instant},
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dadjokes_core::{Joke, JokeStore, Session};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dadjokes", version, about = "A joke of the day in your terminal")]
struct Args {
  /// Path to a TOML config file (catalog, seed, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// TOML catalog of `[[jokes]]` to use instead of the built-in ones.
  #[arg(long, value_name = "FILE")]
  catalog: Option<PathBuf>,

  /// Seed the joke order for a reproducible session.
  #[arg(long)]
  seed: Option<u64>,

  /// Append logs to this file.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Print one joke and exit instead of starting the TUI.
  #[arg(long)]
  print: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let settings = Settings::load(args.config.as_deref())?.override_with(
    args.catalog,
    args.seed,
    args.log_file,
  );

  init_tracing(settings.log_file.as_deref(), args.print)?;
  tracing::debug!(?settings, "configuration resolved");

  let store = settings.joke_store()?;
  let session = new_session(store, settings.seed);

  if args.print {
    let mut stdout = io::stdout().lock();
    print_joke(&mut stdout, session.joke()).context("writing joke")?;
    return Ok(());
  }

  let mut app = App::new(session);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  tracing::info!(
    jokes_enjoyed = app.session.viewed_count(),
    "session ended"
  );
  run_result
}

fn new_session(store: JokeStore, seed: Option<u64>) -> Session {
  match seed {
    Some(seed) => Session::seeded(store, seed),
    None => Session::with_entropy(store),
  }
}

/// Setup on one line, punchline on the next.
fn print_joke(w: &mut impl Write, joke: &Joke) -> io::Result<()> {
  writeln!(w, "{}", joke.setup)?;
  writeln!(w, "{}", joke.punchline)
}

/// Logs go to `log_file` when set, to stderr in print mode, and nowhere
/// otherwise since the TUI owns the terminal.
fn init_tracing(log_file: Option<&Path>, print_mode: bool) -> Result<()> {
  let (writer, ansi) = match log_file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      (BoxMakeWriter::new(Mutex::new(file)), false)
    }
    None if print_mode => (BoxMakeWriter::new(io::stderr), true),
    None => (BoxMakeWriter::new(io::sink), false),
  };

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(writer)
    .with_ansi(ansi)
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    app.tick(Instant::now());
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(50)).context("polling for input")? {
      continue;
    }

    match event::read().context("reading input")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key, Instant::now()) {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  Ok(())
}
