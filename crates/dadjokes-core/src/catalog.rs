//! The joke catalog — an immutable, ordered list of setup/punchline pairs.
//!
//! A [`JokeStore`] is validated once at construction and never changes
//! afterwards. Clones share the same backing slice, so handing a store to
//! several sessions costs one reference count each.

use std::{collections::HashSet, fmt, sync::Arc};

use serde::Deserialize;

use crate::{Error, Result};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Stable identity of a joke within its catalog. Always positive.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize,
)]
#[serde(try_from = "u32")]
pub struct JokeId(u32);

impl JokeId {
  pub fn new(raw: u32) -> Result<Self> {
    if raw == 0 {
      return Err(Error::InvalidId);
    }
    Ok(Self(raw))
  }

  pub fn get(self) -> u32 { self.0 }
}

impl TryFrom<u32> for JokeId {
  type Error = Error;

  fn try_from(raw: u32) -> Result<Self> { Self::new(raw) }
}

impl fmt::Display for JokeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Joke ────────────────────────────────────────────────────────────────────

/// One setup/punchline pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
  pub id:        JokeId,
  /// The question or premise.
  pub setup:     String,
  /// The resolution, hidden until revealed.
  pub punchline: String,
}

impl Joke {
  pub fn new(
    id: JokeId,
    setup: impl Into<String>,
    punchline: impl Into<String>,
  ) -> Self {
    Self {
      id,
      setup: setup.into(),
      punchline: punchline.into(),
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Immutable, ordered joke catalog.
#[derive(Debug, Clone)]
pub struct JokeStore {
  jokes: Arc<[Joke]>,
}

impl JokeStore {
  /// Validate `jokes` and freeze them into a store.
  ///
  /// Rejects an empty list, duplicate ids, and blank setups or punchlines.
  pub fn new(jokes: Vec<Joke>) -> Result<Self> {
    if jokes.is_empty() {
      return Err(Error::EmptyStore);
    }

    let mut seen = HashSet::with_capacity(jokes.len());
    for joke in &jokes {
      if !seen.insert(joke.id) {
        return Err(Error::DuplicateId(joke.id));
      }
      if joke.setup.trim().is_empty() {
        return Err(Error::EmptySetup(joke.id));
      }
      if joke.punchline.trim().is_empty() {
        return Err(Error::EmptyPunchline(joke.id));
      }
    }

    Ok(Self {
      jokes: jokes.into(),
    })
  }

  /// The compiled-in catalog of twenty jokes, ids `1..=20`.
  pub fn builtin() -> Self {
    let jokes: Vec<Joke> = BUILTIN
      .iter()
      .zip(1u32..)
      .map(|((setup, punchline), raw)| Joke {
        id:        JokeId(raw),
        setup:     (*setup).to_string(),
        punchline: (*punchline).to_string(),
      })
      .collect();
    Self {
      jokes: jokes.into(),
    }
  }

  /// Every joke, in catalog order.
  pub fn all(&self) -> &[Joke] { &self.jokes }

  pub fn get(&self, id: JokeId) -> Option<&Joke> {
    self.jokes.iter().find(|j| j.id == id)
  }

  pub fn contains(&self, id: JokeId) -> bool { self.get(id).is_some() }

  pub fn len(&self) -> usize { self.jokes.len() }

  /// Never `true` for a store built by [`JokeStore::new`] or
  /// [`JokeStore::builtin`].
  pub fn is_empty(&self) -> bool { self.jokes.is_empty() }
}

// ─── Catalog file ────────────────────────────────────────────────────────────

/// Serde shape of a user-supplied catalog:
///
/// ```toml
/// [[jokes]]
/// id = 1
/// setup = "What do you call a fake noodle?"
/// punchline = "An impasta!"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
  #[serde(default)]
  pub jokes: Vec<Joke>,
}

impl CatalogFile {
  pub fn into_store(self) -> Result<JokeStore> { JokeStore::new(self.jokes) }
}

// ─── Built-in data ───────────────────────────────────────────────────────────

const BUILTIN: &[(&str, &str)] = &[
  ("Why don't scientists trust atoms?", "Because they make up everything!"),
  ("What do you call a fake noodle?", "An impasta!"),
  (
    "Why did the scarecrow win an award?",
    "Because he was outstanding in his field!",
  ),
  ("I'm reading a book about anti-gravity...", "It's impossible to put down!"),
  ("Why don't eggs tell jokes?", "They'd crack each other up!"),
  ("What do you call a bear with no teeth?", "A gummy bear!"),
  ("I used to hate facial hair...", "But then it grew on me."),
  ("Why did the bicycle fall over?", "Because it was two-tired!"),
  ("What's orange and sounds like a parrot?", "A carrot!"),
  ("I'm afraid for the calendar...", "Its days are numbered."),
  (
    "Why do fathers take an extra pair of socks when they go golfing?",
    "In case they get a hole in one!",
  ),
  ("What do you call cheese that isn't yours?", "Nacho cheese!"),
  (
    "Why couldn't the leopard play hide and seek?",
    "Because he was always spotted!",
  ),
  ("I only know 25 letters of the alphabet...", "I don't know Y."),
  ("What did the ocean say to the beach?", "Nothing, it just waved."),
  ("Why do bees have sticky hair?", "Because they use honeycombs!"),
  ("What do you call a fish without eyes?", "A fsh!"),
  ("I'm on a seafood diet...", "I see food and I eat it."),
  ("Why did the coffee file a police report?", "It got mugged!"),
  ("What do you call a sleeping dinosaur?", "A dino-snore!"),
];

#[cfg(test)]
mod tests {
  use super::*;

  fn joke(id: u32, setup: &str, punchline: &str) -> Joke {
    Joke::new(JokeId::new(id).unwrap(), setup, punchline)
  }

  #[test]
  fn builtin_has_twenty_distinct_ids() {
    let store = JokeStore::builtin();
    assert_eq!(store.len(), 20);
    let ids: HashSet<_> = store.all().iter().map(|j| j.id).collect();
    assert_eq!(ids.len(), 20);
    assert_eq!(store.all()[0].id.get(), 1);
    assert_eq!(store.all()[19].id.get(), 20);
  }

  #[test]
  fn builtin_passes_validation() {
    let jokes = JokeStore::builtin().all().to_vec();
    assert!(JokeStore::new(jokes).is_ok());
  }

  #[test]
  fn zero_id_is_rejected() {
    assert_eq!(JokeId::new(0), Err(Error::InvalidId));
  }

  #[test]
  fn empty_list_is_rejected() {
    assert_eq!(JokeStore::new(vec![]).unwrap_err(), Error::EmptyStore);
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let err = JokeStore::new(vec![
      joke(7, "a", "b"),
      joke(8, "c", "d"),
      joke(7, "e", "f"),
    ])
    .unwrap_err();
    assert_eq!(err, Error::DuplicateId(JokeId::new(7).unwrap()));
  }

  #[test]
  fn blank_text_is_rejected() {
    let id = JokeId::new(3).unwrap();
    assert_eq!(
      JokeStore::new(vec![joke(3, "  ", "b")]).unwrap_err(),
      Error::EmptySetup(id)
    );
    assert_eq!(
      JokeStore::new(vec![joke(3, "a", "")]).unwrap_err(),
      Error::EmptyPunchline(id)
    );
  }

  #[test]
  fn get_and_contains() {
    let store = JokeStore::builtin();
    let id = JokeId::new(2).unwrap();
    assert_eq!(store.get(id).unwrap().punchline, "An impasta!");
    assert!(store.contains(id));
    assert!(!store.contains(JokeId::new(99).unwrap()));
  }

  #[test]
  fn mutating_a_copy_leaves_the_store_alone() {
    let store = JokeStore::builtin();
    let mut copy = store.all().to_vec();
    copy.clear();
    assert_eq!(store.len(), 20);
  }

  #[test]
  fn catalog_file_from_toml() {
    let raw = r#"
      [[jokes]]
      id = 1
      setup = "Why?"
      punchline = "Because."

      [[jokes]]
      id = 5
      setup = "What?"
      punchline = "That."
    "#;
    let file: CatalogFile = toml::from_str(raw).unwrap();
    let store = file.into_store().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[1].id.get(), 5);
  }

  #[test]
  fn catalog_file_rejects_zero_id() {
    let raw = r#"
      [[jokes]]
      id = 0
      setup = "Why?"
      punchline = "Because."
    "#;
    assert!(toml::from_str::<CatalogFile>(raw).is_err());
  }

  #[test]
  fn empty_catalog_file_is_an_empty_store() {
    let file: CatalogFile = toml::from_str("").unwrap();
    assert_eq!(file.into_store().unwrap_err(), Error::EmptyStore);
  }
}
