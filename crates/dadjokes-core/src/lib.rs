//! Core types for Dad Jokes Daily: the joke catalog, random selection with
//! repeat avoidance, and the per-session display state.
//!
//! This crate is free of terminal and file-system dependencies. The CLI
//! front end depends on it; it depends on nothing the view layer provides.

pub mod catalog;
pub mod error;
pub mod reaction;
pub mod selector;
pub mod session;

pub use catalog::{CatalogFile, Joke, JokeId, JokeStore};
pub use error::{Error, Result};
pub use reaction::{Reaction, ReactionSink, TracingSink};
pub use session::{RevealState, Session, SessionSnapshot};
