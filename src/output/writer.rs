//! Incremental JSON result writer
//!
//! The entire result set is rewritten after every accepted entry, so a crash
//! after entry K never loses entries 1..K. The write goes to a temporary
//! sibling file first and is renamed into place, which keeps the document
//! parsable even if the run dies mid-write.

use crate::harvest::GameEntry;
use crate::HarvestError;
use std::path::{Path, PathBuf};

/// Persists the growing result set to a JSON document
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the result document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the full entry sequence and replaces the document
    ///
    /// Any failure here is fatal to the run: a storage fault is not a
    /// network fault and is not retried.
    pub fn persist(&self, entries: &[GameEntry]) -> Result<(), HarvestError> {
        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|source| HarvestError::Persist {
            path: self.path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| HarvestError::Persist {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Persisted {} entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(title: &str, new_price: f64) -> GameEntry {
        GameEntry {
            title: title.to_string(),
            discount: "-50%".to_string(),
            old_price: new_price * 2.0,
            new_price,
            discount_expire: "Ends soon".to_string(),
            link: format!("https://store.playstation.com/en-tr/concept/{}", title),
        }
    }

    fn read_back(path: &Path) -> Vec<GameEntry> {
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_persist_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");
        let writer = ResultWriter::new(&path);

        let entries = vec![entry("a", 100.0), entry("b", 249.5)];
        writer.persist(&entries).unwrap();

        assert_eq!(read_back(&path), entries);
    }

    #[test]
    fn test_every_prefix_is_valid() {
        // The document must deserialize to exactly the entries written so
        // far, after every single persist call.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");
        let writer = ResultWriter::new(&path);

        let mut entries = Vec::new();
        for (i, title) in ["a", "b", "c", "d"].iter().enumerate() {
            entries.push(entry(title, i as f64 + 1.0));
            writer.persist(&entries).unwrap();
            assert_eq!(read_back(&path), entries);
        }
    }

    #[test]
    fn test_empty_set_is_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");
        let writer = ResultWriter::new(&path);

        writer.persist(&[]).unwrap();
        assert!(read_back(&path).is_empty());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("games.json");
        let writer = ResultWriter::new(&path);

        writer.persist(&[entry("a", 1.0)]).unwrap();
        assert!(!dir.path().join("games.json.tmp").exists());
    }

    #[test]
    fn test_unwritable_target_is_error() {
        let writer = ResultWriter::new("/nonexistent-dir/games.json");
        let result = writer.persist(&[entry("a", 1.0)]);
        assert!(matches!(result, Err(HarvestError::Persist { .. })));
    }
}
