//! Application state and key dispatcher.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dadjokes_core::{JokeId, Reaction, Session};

/// How long a pressed reaction stays highlighted.
pub const FLASH_DURATION: Duration = Duration::from_millis(500);

// ─── Flash ────────────────────────────────────────────────────────────────────

/// Short-lived highlight on a just-pressed reaction. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
  pub joke_id:  JokeId,
  pub reaction: Reaction,
  pub until:    Instant,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// The joke on screen, the advance counter and the reveal flag.
  pub session: Session,

  /// Last reaction given, tagged with the joke it was given to.
  pub selected: Option<(JokeId, Reaction)>,

  /// Pending highlight reset, if any.
  pub flash: Option<Flash>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(session: Session) -> Self {
    Self {
      session,
      selected: None,
      flash: None,
      status_msg: String::new(),
    }
  }

  /// The reaction to highlight for the joke on screen.
  pub fn selected_reaction(&self) -> Option<Reaction> {
    let current = self.session.joke().id;
    self
      .selected
      .filter(|(id, _)| *id == current)
      .map(|(_, r)| r)
  }

  /// The reaction currently flashing, if it belongs to the joke on screen.
  pub fn flashing(&self) -> Option<Reaction> {
    let current = self.session.joke().id;
    self
      .flash
      .filter(|f| f.joke_id == current)
      .map(|f| f.reaction)
  }

  // ── Timers ────────────────────────────────────────────────────────────────

  /// Expire the reaction highlight once its time is up.
  pub fn tick(&mut self, now: Instant) {
    if self.flash.is_some_and(|f| now >= f.until) {
      self.flash = None;
    }
  }

  // ── Actions ───────────────────────────────────────────────────────────────

  pub fn reveal(&mut self) {
    self.session.reveal();
    self.status_msg.clear();
  }

  /// Move to the next joke. Clears any pending highlight first so a
  /// cosmetic reset can never land on the new joke.
  pub fn next_joke(&mut self) {
    self.flash = None;
    let snap = self.session.advance();
    tracing::debug!(joke_id = %snap.joke.id, count = snap.count, "next joke");
    self.status_msg.clear();
  }

  pub fn react(&mut self, reaction: Reaction, now: Instant) {
    let joke_id = self.session.joke().id;
    self.session.react(reaction);
    self.selected = Some((joke_id, reaction));
    self.flash = Some(Flash {
      joke_id,
      reaction,
      until: now + FLASH_DURATION,
    });
    self.status_msg = format!("{} {}", reaction.emoji(), reaction.label());
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    let revealed = self.session.is_revealed();

    match key.code {
      // Quit
      KeyCode::Char('q') | KeyCode::Esc => return false,

      // Reveal, or move on once revealed
      KeyCode::Enter | KeyCode::Char(' ') => {
        if revealed {
          self.next_joke();
        } else {
          self.reveal();
        }
      }
      KeyCode::Char('r') => self.reveal(),
      KeyCode::Char('n') | KeyCode::Right => {
        if revealed {
          self.next_joke();
        } else {
          self.status_msg = "Hear the punchline first (Enter)".into();
        }
      }

      // Reactions, numbered left to right
      KeyCode::Char(c @ '1'..='4') => {
        let idx = (c as u8 - b'1') as usize;
        self.react(Reaction::ALL[idx], now);
      }

      _ => {}
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use dadjokes_core::JokeStore;

  use super::*;

  fn app() -> App { App::new(Session::seeded(JokeStore::builtin(), 21)) }

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  #[test]
  fn enter_reveals_then_advances() {
    let mut app = app();
    let now = Instant::now();
    let first = app.session.joke().id;

    assert!(app.handle_key(key(KeyCode::Enter), now));
    assert!(app.session.is_revealed());
    assert_eq!(app.session.viewed_count(), 0);

    assert!(app.handle_key(key(KeyCode::Enter), now));
    assert!(!app.session.is_revealed());
    assert_eq!(app.session.viewed_count(), 1);
    assert_ne!(app.session.joke().id, first);
  }

  #[test]
  fn next_is_refused_before_reveal() {
    let mut app = app();
    let now = Instant::now();
    app.handle_key(key(KeyCode::Char('n')), now);
    assert_eq!(app.session.viewed_count(), 0);
    assert!(!app.status_msg.is_empty());

    app.handle_key(key(KeyCode::Char('r')), now);
    app.handle_key(key(KeyCode::Char('r')), now);
    assert!(app.session.is_revealed());
    app.handle_key(key(KeyCode::Char('n')), now);
    assert_eq!(app.session.viewed_count(), 1);
  }

  #[test]
  fn number_keys_react_without_touching_the_session() {
    let mut app = app();
    let now = Instant::now();
    let before = app.session.current();

    app.handle_key(key(KeyCode::Char('4')), now);
    assert_eq!(app.selected_reaction(), Some(Reaction::Groan));
    assert_eq!(app.flashing(), Some(Reaction::Groan));

    app.handle_key(key(KeyCode::Char('1')), now);
    assert_eq!(app.selected_reaction(), Some(Reaction::Hilarious));
    assert_eq!(app.session.current(), before);
    assert!(!app.session.is_revealed());
  }

  #[test]
  fn flash_expires_on_tick() {
    let mut app = app();
    let now = Instant::now();
    app.react(Reaction::Meh, now);

    app.tick(now + Duration::from_millis(100));
    assert_eq!(app.flashing(), Some(Reaction::Meh));

    app.tick(now + FLASH_DURATION);
    assert_eq!(app.flashing(), None);
  }

  #[test]
  fn advancing_wins_over_pending_flash() {
    let mut app = app();
    let now = Instant::now();
    app.react(Reaction::Good, now);
    app.reveal();
    app.next_joke();

    assert!(app.flash.is_none());
    assert_eq!(app.flashing(), None);
    // The old selection does not carry over to the new joke.
    assert_eq!(app.selected_reaction(), None);

    app.tick(now + FLASH_DURATION);
    assert_eq!(app.session.viewed_count(), 1);
  }

  #[test]
  fn quit_keys() {
    let now = Instant::now();
    assert!(!app().handle_key(key(KeyCode::Char('q')), now));
    assert!(!app().handle_key(key(KeyCode::Esc), now));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!app().handle_key(ctrl_c, now));
  }
}
