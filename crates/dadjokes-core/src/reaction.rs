//! Reactions — a user's rating of the joke on screen.
//!
//! The core does not store reactions. It hands each one to a
//! [`ReactionSink`] along with the joke it was given to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result, catalog::Joke};

/// The closed set of reactions.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Reaction {
  Hilarious,
  Good,
  Meh,
  Groan,
}

impl Reaction {
  /// Display order, left to right.
  pub const ALL: [Reaction; 4] =
    [Self::Hilarious, Self::Good, Self::Meh, Self::Groan];

  pub fn emoji(self) -> &'static str {
    match self {
      Self::Hilarious => "😂",
      Self::Good => "😄",
      Self::Meh => "😐",
      Self::Groan => "🙄",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Hilarious => "Hilarious",
      Self::Good => "Good one",
      Self::Meh => "Meh",
      Self::Groan => "Groan",
    }
  }

  /// Parse a wire name, rejecting anything outside the closed set.
  pub fn parse(raw: &str) -> Result<Self> {
    <Self as FromStr>::from_str(raw)
      .map_err(|_| Error::UnknownReaction(raw.to_string()))
  }
}

// ─── Sinks ───────────────────────────────────────────────────────────────────

/// Receiver for reactions. Implementations must not assume they see every
/// reaction exactly once per joke; a user may change their mind.
pub trait ReactionSink: Send {
  fn record(&mut self, joke: &Joke, reaction: Reaction);
}

/// Logs each reaction as a `tracing` event and drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReactionSink for TracingSink {
  fn record(&mut self, joke: &Joke, reaction: Reaction) {
    tracing::info!(joke_id = %joke.id, %reaction, "user reacted");
  }
}

impl<F> ReactionSink for F
where
  F: FnMut(&Joke, Reaction) + Send,
{
  fn record(&mut self, joke: &Joke, reaction: Reaction) { self(joke, reaction) }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn wire_names_are_lowercase() {
    let names: Vec<_> = Reaction::iter().map(|r| r.to_string()).collect();
    assert_eq!(names, ["hilarious", "good", "meh", "groan"]);
    assert_eq!(Reaction::Good.as_ref(), "good");
  }

  #[test]
  fn all_matches_declaration_order() {
    assert!(Reaction::iter().eq(Reaction::ALL));
  }

  #[test]
  fn parse_known_values() {
    assert_eq!(Reaction::parse("meh"), Ok(Reaction::Meh));
    assert_eq!(Reaction::parse("groan"), Ok(Reaction::Groan));
  }

  #[test]
  fn parse_rejects_unknown_values() {
    assert_eq!(
      Reaction::parse("lol"),
      Err(Error::UnknownReaction("lol".into()))
    );
    assert!(Reaction::parse("").is_err());
    assert!(Reaction::parse("Hilarious").is_err());
  }

  #[test]
  fn serde_uses_wire_names() {
    let json = serde_json::to_string(&Reaction::Hilarious).unwrap();
    assert_eq!(json, "\"hilarious\"");
    assert!(serde_json::from_str::<Reaction>("\"boo\"").is_err());
  }
}
