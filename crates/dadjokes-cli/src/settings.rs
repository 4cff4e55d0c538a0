//! Layered configuration: optional TOML file, then `DADJOKES_*` environment
//! variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dadjokes_core::{CatalogFile, JokeStore};
use serde::Deserialize;

/// Everything the front end can be configured with. All fields are optional;
/// an empty configuration means the built-in catalog, an OS-seeded rng and
/// no log file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
  /// TOML catalog replacing the built-in jokes.
  #[serde(default)]
  pub catalog:  Option<PathBuf>,
  /// Fixed rng seed for a reproducible joke order.
  #[serde(default)]
  pub seed:     Option<u64>,
  /// Append log output here instead of discarding it.
  #[serde(default)]
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// Read `path` (if given, it must exist) and overlay the environment.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    Self::load_with_env(path, None)
  }

  /// As [`Settings::load`], reading `DADJOKES_*` variables from `env`
  /// instead of the process environment when it is given.
  pub fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
  ) -> Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(true));
    }
    builder
      .add_source(config::Environment::with_prefix("DADJOKES").source(env))
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  /// Flags given on the command line win over file and environment.
  pub fn override_with(
    mut self,
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
  ) -> Self {
    if catalog.is_some() {
      self.catalog = catalog;
    }
    if seed.is_some() {
      self.seed = seed;
    }
    if log_file.is_some() {
      self.log_file = log_file;
    }
    self
  }

  /// The configured catalog, or the built-in one.
  pub fn joke_store(&self) -> Result<JokeStore> {
    let Some(path) = &self.catalog else {
      return Ok(JokeStore::builtin());
    };
    let store = load_catalog(path)?;
    if store.len() < 2 {
      tracing::warn!(
        path = %path.display(),
        "catalog has a single joke; every advance will repeat it"
      );
    }
    tracing::info!(path = %path.display(), jokes = store.len(), "loaded catalog");
    Ok(store)
  }
}

/// Parse and validate a `[[jokes]]` TOML catalog.
pub fn load_catalog(path: &Path) -> Result<JokeStore> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading catalog {}", path.display()))?;
  let file: CatalogFile = toml::from_str(&raw)
    .with_context(|| format!("parsing catalog {}", path.display()))?;
  file
    .into_store()
    .with_context(|| format!("invalid catalog {}", path.display()))
}
