//! Fixtures
//!
//! Sample cabin collections stored as YAML under `fixtures/cabins/`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::cabins::Cabin;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two cabins share a fixture key
    #[error("Duplicate cabin key: {0}")]
    DuplicateKey(String),

    /// Cabin not found
    #[error("Cabin not found: {0}")]
    CabinNotFound(String),
}

#[derive(Debug, Deserialize)]
struct CabinsFile {
    cabins: Vec<CabinEntry>,
}

#[derive(Debug, Deserialize)]
struct CabinEntry {
    key: String,

    #[serde(flatten)]
    cabin: Cabin,
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Cabins in file order
    cabins: Vec<Cabin>,

    /// Fixture key -> index into `cabins`
    keys: FxHashMap<String, usize>,
}

impl Fixture {
    /// Base directory holding the fixture sets.
    pub fn base_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Load the named set from `fixtures/cabins/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or repeats a key.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let path = Self::base_path().join("cabins").join(format!("{name}.yml"));

        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Parse a fixture set from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or repeats a key.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let file: CabinsFile = serde_norway::from_str(yaml)?;

        let mut cabins = Vec::with_capacity(file.cabins.len());
        let mut keys = FxHashMap::default();

        for entry in file.cabins {
            if keys.insert(entry.key.clone(), cabins.len()).is_some() {
                return Err(FixtureError::DuplicateKey(entry.key));
            }

            cabins.push(entry.cabin);
        }

        Ok(Self { cabins, keys })
    }

    /// All cabins, in file order.
    pub fn cabins(&self) -> &[Cabin] {
        &self.cabins
    }

    /// Cabin stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if no cabin uses the key.
    pub fn cabin(&self, key: &str) -> Result<&Cabin, FixtureError> {
        self.keys
            .get(key)
            .and_then(|&index| self.cabins.get(index))
            .ok_or_else(|| FixtureError::CabinNotFound(key.to_string()))
    }
}
