//! Uniform random selection from a [`JokeStore`] with repeat avoidance.

use rand::Rng;

use crate::catalog::{Joke, JokeId, JokeStore};

/// Pick one joke uniformly at random, never returning `exclude` when any
/// other joke exists.
///
/// - `exclude` of `None`, or an id not in the store: every joke is a
///   candidate.
/// - Otherwise every joke except the excluded one is a candidate.
/// - If that leaves nothing (a one-joke catalog), the full catalog is used
///   instead, so the lone joke comes back.
pub fn pick<'a, R>(
  store: &'a JokeStore,
  exclude: Option<JokeId>,
  rng: &mut R,
) -> &'a Joke
where
  R: Rng + ?Sized,
{
  let all = store.all();

  let mut candidates: Vec<&Joke> = match exclude {
    Some(id) => all.iter().filter(|j| j.id != id).collect(),
    None => all.iter().collect(),
  };

  // Filter emptied the candidate set (one-joke catalog).
  if candidates.is_empty() {
    candidates = all.iter().collect();
  }

  candidates[rng.gen_range(0..candidates.len())]
}
