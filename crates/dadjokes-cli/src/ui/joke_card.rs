//! Joke card — the setup, and either the reveal prompt or the punchline.

use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

/// Render the card into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let joke = app.session.joke();

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray))
    .padding(Padding::horizontal(1));

  let caption = Style::default()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

  let mut lines: Vec<Line> = vec![
    Line::from(""),
    Line::from(Span::styled("THE SETUP", caption)),
    Line::from(Span::styled(
      joke.setup.as_str(),
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from(""),
  ];

  if app.session.is_revealed() {
    lines.push(Line::from(Span::styled(
      "THE PUNCHLINE",
      caption.fg(Color::LightRed),
    )));
    lines.push(Line::from(Span::styled(
      joke.punchline.as_str(),
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(button("Another one! 🔄", "n", Color::Gray));
  } else {
    lines.push(button("Tell me! 🤭", "Enter", Color::LightYellow));
  }

  let para = Paragraph::new(lines)
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
  f.render_widget(para, area);
}

/// A bracketed pseudo-button with its key hint.
fn button(label: &str, key: &str, color: Color) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("[ {label} ]"),
      Style::default()
        .fg(Color::Black)
        .bg(color)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {key}"), Style::default().fg(Color::DarkGray)),
  ])
}
