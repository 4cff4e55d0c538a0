//! Reaction bar — "Rate this joke:" followed by the four reactions.

use dadjokes_core::Reaction;
use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the bar into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let selected = app.selected_reaction();
  let flashing = app.flashing();

  let mut spans = vec![Span::styled(
    "Rate this joke: ",
    Style::default().fg(Color::Gray),
  )];

  for (i, reaction) in Reaction::ALL.into_iter().enumerate() {
    let style = if flashing == Some(reaction) {
      Style::default()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
    } else if selected == Some(reaction) {
      Style::default()
        .fg(Color::White)
        .bg(Color::Magenta)
    } else {
      Style::default()
    };

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
      format!("{} {} {}", i + 1, reaction.emoji(), reaction.label()),
      style,
    ));
  }

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  f.render_widget(
    Paragraph::new(Line::from(spans))
      .block(block)
      .alignment(Alignment::Center),
    area,
  );
}
