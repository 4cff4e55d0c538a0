//! Session state — which joke is on screen, how many the user has moved
//! past, and whether the current punchline has been revealed.
//!
//! A [`Session`] is the only place these values change. Every transition
//! goes through [`Session::advance`], which takes `&mut self`, so no reader
//! can see the new joke without the matching counter bump.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
  catalog::{Joke, JokeId, JokeStore},
  reaction::{Reaction, ReactionSink, TracingSink},
  selector,
};

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// What the view layer needs to render: the joke and the advance count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
  pub joke:  Joke,
  /// Number of jokes advanced past; the first joke is not counted.
  pub count: u64,
}

// ─── Reveal state ────────────────────────────────────────────────────────────

/// Punchline visibility, keyed to the joke it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
  joke_id:  JokeId,
  revealed: bool,
}

impl RevealState {
  pub fn hidden(joke_id: JokeId) -> Self {
    Self {
      joke_id,
      revealed: false,
    }
  }

  pub fn joke_id(&self) -> JokeId { self.joke_id }

  /// Whether the punchline of `joke_id` is visible. A state keyed to some
  /// other joke is never revealed for this one.
  pub fn is_revealed_for(&self, joke_id: JokeId) -> bool {
    self.revealed && self.joke_id == joke_id
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Per-session display state. Sessions never share mutable state; the store
/// they read from is immutable.
pub struct Session<R = StdRng> {
  store:        JokeStore,
  rng:          R,
  current:      Joke,
  viewed_count: u64,
  reveal:       RevealState,
  sink:         Box<dyn ReactionSink>,
}

impl Session<StdRng> {
  /// Start a session with an OS-seeded rng that logs reactions via
  /// `tracing`.
  pub fn with_entropy(store: JokeStore) -> Self {
    Self::start(store, StdRng::from_entropy(), Box::new(TracingSink))
  }

  /// Start a reproducible session: the same seed over the same catalog
  /// yields the same sequence of jokes.
  pub fn seeded(store: JokeStore, seed: u64) -> Self {
    Self::start(store, StdRng::seed_from_u64(seed), Box::new(TracingSink))
  }
}

impl<R: Rng> Session<R> {
  /// Pick the first joke with no exclusion and zero the counter.
  pub fn start(
    store: JokeStore,
    mut rng: R,
    sink: Box<dyn ReactionSink>,
  ) -> Self {
    let current = selector::pick(&store, None, &mut rng).clone();
    tracing::debug!(
      joke_id = %current.id,
      catalog = store.len(),
      "session started"
    );
    Self {
      reveal: RevealState::hidden(current.id),
      store,
      rng,
      current,
      viewed_count: 0,
      sink,
    }
  }

  /// Move to a different joke, bump the counter and hide the punchline.
  pub fn advance(&mut self) -> SessionSnapshot {
    let next =
      selector::pick(&self.store, Some(self.current.id), &mut self.rng).clone();
    tracing::debug!(from = %self.current.id, to = %next.id, "advancing");

    self.current = next;
    self.viewed_count += 1;
    self.reveal = RevealState::hidden(self.current.id);

    self.current()
  }

  /// Snapshot of the joke on screen and the advance count.
  pub fn current(&self) -> SessionSnapshot {
    SessionSnapshot {
      joke:  self.current.clone(),
      count: self.viewed_count,
    }
  }

  pub fn joke(&self) -> &Joke { &self.current }

  pub fn viewed_count(&self) -> u64 { self.viewed_count }

  pub fn store(&self) -> &JokeStore { &self.store }

  /// Show the current punchline. Calling it again changes nothing.
  pub fn reveal(&mut self) {
    if !self.reveal.revealed {
      tracing::debug!(joke_id = %self.current.id, "punchline revealed");
    }
    self.reveal = RevealState {
      joke_id:  self.current.id,
      revealed: true,
    };
  }

  pub fn is_revealed(&self) -> bool {
    self.reveal.is_revealed_for(self.current.id)
  }

  pub fn reveal_state(&self) -> RevealState { self.reveal }

  /// Forward a reaction on the current joke to the sink. Touches nothing
  /// else.
  pub fn react(&mut self, reaction: Reaction) {
    self.sink.record(&self.current, reaction);
  }
}

impl<R> fmt::Debug for Session<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("current", &self.current.id)
      .field("viewed_count", &self.viewed_count)
      .field("reveal", &self.reveal)
      .field("catalog", &self.store.len())
      .finish_non_exhaustive()
  }
}
