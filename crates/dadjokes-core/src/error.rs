//! Error types for `dadjokes-core`.

use thiserror::Error;

use crate::catalog::JokeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("joke catalog is empty")]
  EmptyStore,

  #[error("joke ids must be positive")]
  InvalidId,

  #[error("duplicate joke id: {0}")]
  DuplicateId(JokeId),

  #[error("joke {0} has an empty setup")]
  EmptySetup(JokeId),

  #[error("joke {0} has an empty punchline")]
  EmptyPunchline(JokeId),

  #[error("unknown reaction: {0:?}")]
  UnknownReaction(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
