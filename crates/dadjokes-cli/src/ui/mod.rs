//! TUI rendering — orchestrates all panes.

pub mod joke_card;
pub mod reaction_bar;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

/// Widest the joke card and reaction bar will grow.
const CONTENT_WIDTH: u16 = 72;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, tagline, card, reactions, counter, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(3), // tagline
      Constraint::Min(8),    // joke card
      Constraint::Length(3), // reaction bar
      Constraint::Length(1), // counter
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_tagline(f, rows[1]);
  joke_card::draw(f, centered(rows[2]), app);
  reaction_bar::draw(f, centered(rows[3]), app);
  draw_counter(f, rows[4], app);
  draw_status(f, rows[5], app);
}

/// Horizontally centre a column no wider than [`CONTENT_WIDTH`].
fn centered(area: Rect) -> Rect {
  let [column] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
    .flex(Flex::Center)
    .areas(area);
  column
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Dad Jokes Daily",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  let left_width = left.width() as u16;
  let right_width = right.width() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

fn draw_tagline(f: &mut Frame, area: Rect) {
  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      "Your daily dose of eye-roll-worthy humor.",
      Style::default().fg(Color::Gray),
    )),
    Line::from(Span::styled(
      "Warning: groans expected.",
      Style::default().fg(Color::LightRed),
    )),
  ];
  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

// ─── Counter ──────────────────────────────────────────────────────────────────

fn draw_counter(f: &mut Frame, area: Rect, app: &App) {
  let line = Line::from(vec![
    Span::styled("Jokes enjoyed today: ", Style::default().fg(Color::Gray)),
    Span::styled(
      app.session.viewed_count().to_string(),
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    ),
  ]);
  f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.session.is_revealed() {
    ("PUNCHLINE", "Enter/n another one  1-4 rate  q quit")
  } else {
    ("SETUP", "Enter reveal  1-4 rate  q quit")
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use std::time::Instant;

  use dadjokes_core::{JokeStore, Reaction, Session};
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;

  /// Render one frame and return its text, one string per row.
  fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
      .content()
      .chunks(width)
      .map(|row| row.iter().map(|cell| cell.symbol()).collect())
      .collect()
  }

  fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
  }

  fn app() -> App { App::new(Session::seeded(JokeStore::builtin(), 3)) }

  #[test]
  fn setup_shown_punchline_hidden() {
    let app = app();
    let rows = render(&app);
    assert!(screen_contains(&rows, "Dad Jokes Daily"));
    assert!(screen_contains(&rows, &app.session.joke().setup));
    assert!(screen_contains(&rows, "Tell me!"));
    assert!(!screen_contains(&rows, &app.session.joke().punchline));
    assert!(screen_contains(&rows, "Jokes enjoyed today: 0"));
  }

  #[test]
  fn punchline_shown_after_reveal() {
    let mut app = app();
    app.reveal();
    let rows = render(&app);
    assert!(screen_contains(&rows, &app.session.joke().punchline));
    assert!(screen_contains(&rows, "Another one!"));
    assert!(screen_contains(&rows, "PUNCHLINE"));
  }

  #[test]
  fn counter_follows_advances() {
    let mut app = app();
    for _ in 0..3 {
      app.reveal();
      app.next_joke();
    }
    let rows = render(&app);
    assert!(screen_contains(&rows, "Jokes enjoyed today: 3"));
  }

  #[test]
  fn reaction_bar_lists_every_reaction() {
    let mut app = app();
    app.react(Reaction::Meh, Instant::now());
    let rows = render(&app);
    assert!(screen_contains(&rows, "Rate this joke:"));
    for r in Reaction::ALL {
      assert!(screen_contains(&rows, r.label()), "{r}");
    }
  }
}
