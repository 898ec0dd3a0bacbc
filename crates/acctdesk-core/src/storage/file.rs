//! File-backed storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a sibling temp file that
//! is renamed over the target, so a crash mid-write leaves the previous value.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::Storage;
use crate::{Error, Result};

const FILE_EXTENSION: &str = "json";

/// Storage that keeps one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`.
    ///
    /// The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] for empty keys and keys that could escape
    /// the storage directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(contents) => Ok(Some(contents)),
                // Corrupt contents are malformed data, not a backend failure
                Err(e) => {
                    warn!("{:?} is not valid UTF-8, reading it lossily", path);
                    Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let tmp_path = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get_item("accounts").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let storage = FileStorage::new(&root);

        storage.set_item("accounts", "[]").unwrap();

        let on_disk = std::fs::read_to_string(root.join("accounts.json")).unwrap();
        assert_eq!(on_disk, "[]");
        assert_eq!(storage.get_item("accounts").unwrap().as_deref(), Some("[]"));
        assert!(!root.join("accounts.json.tmp").exists());
    }

    #[test]
    fn invalid_utf8_reads_lossily() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("k.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let storage = FileStorage::new(dir.path());

        let contents = storage.get_item("k").unwrap().unwrap();
        assert!(contents.ends_with("[]"));
        assert!(contents.starts_with('\u{fffd}'));
    }

    #[test]
    fn set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set_item("k", "first").unwrap();
        storage.set_item("k", "second").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn rejects_unsafe_keys() {
        let storage = FileStorage::new("/tmp/unused");
        for key in ["", ".", "..", "a/b", "..\\x", "nul\0byte"] {
            assert!(
                matches!(storage.path_for(key), Err(Error::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
        assert!(storage.path_for("accounts").is_ok());
    }
}
