//! Word Store
//!
//! In-memory dictionary backed by a single JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{LexiError, Result};

/// Normalize a word into its storage key (trimmed, lowercase)
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// The dictionary and its backing file
///
/// ## Concurrency:
/// - `entries`: Protected by RwLock (many concurrent readers, exclusive writer)
/// - Inserts hold the write lock across the file rewrite, so a lookup never
///   sees an entry that is not yet on disk
pub struct WordStore {
    /// Backing file, rewritten in full on every insert
    path: PathBuf,

    /// Normalized word → definition
    entries: RwLock<BTreeMap<String, String>>,
}

impl WordStore {
    /// Open the store at `path`
    ///
    /// - Missing file → empty dictionary (the file is created on first insert)
    /// - Present but unparsable → `StorageCorrupt`
    pub fn open(path: &Path) -> Result<Self> {
        let entries = match fs::read(path) {
            Ok(contents) => Self::parse(path, &contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No dictionary at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "Loaded {} entries from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    /// Look up a definition (case-insensitive)
    pub fn lookup(&self, word: &str) -> Option<String> {
        self.entries.read().get(&normalize(word)).cloned()
    }

    /// Insert a new entry and persist the whole dictionary
    ///
    /// Returns the new entry count. Fails with `AlreadyExists` if the
    /// normalized word is already present; the stored definition is left
    /// untouched in that case.
    pub fn insert(&self, word: &str, definition: &str) -> Result<usize> {
        let key = normalize(word);
        let mut entries = self.entries.write();

        if entries.contains_key(&key) {
            return Err(LexiError::AlreadyExists(word.to_string()));
        }

        entries.insert(key.clone(), definition.to_string());

        if let Err(e) = self.persist(&entries) {
            // Keep memory and disk in agreement
            entries.remove(&key);
            return Err(e);
        }

        tracing::info!("Recorded '{}' ({} entries)", key, entries.len());
        Ok(entries.len())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of all entries, sorted by word
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Parse the file contents as a flat word → definition object
    ///
    /// Invalid UTF-8, non-object JSON, non-string or blank definitions are
    /// all `StorageCorrupt`.
    fn parse(path: &Path, contents: &[u8]) -> Result<BTreeMap<String, String>> {
        let entries: BTreeMap<String, String> = serde_json::from_slice(contents)
            .map_err(|e| LexiError::StorageCorrupt(format!("{}: {}", path.display(), e)))?;

        for (key, definition) in &entries {
            if definition.trim().is_empty() {
                return Err(LexiError::StorageCorrupt(format!(
                    "{}: blank definition for '{}'",
                    path.display(),
                    key
                )));
            }
            if *key != normalize(key) {
                tracing::warn!(
                    "Key '{}' in {} is not normalized and can never be matched",
                    key,
                    path.display()
                );
            }
        }

        Ok(entries)
    }

    /// Overwrite the backing file with the full dictionary
    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let mut json = serde_json::to_string_pretty(entries)
            .map_err(|e| LexiError::Serialization(e.to_string()))?;
        json.push('\n');

        fs::write(&self.path, json).map_err(|e| {
            tracing::error!("Failed to write {}: {}", self.path.display(), e);
            LexiError::Io(e)
        })
    }
}
