//! # File Store
//!
//! One file per key under a root directory. Writes go to a temp file that is
//! fsynced and then renamed over the target, so a record is either the old
//! value or the new one, never a mix.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::backend::KeyValueStore;
use super::errors::{PersistenceError, PersistenceResult};

/// Local filesystem key-value store
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    quota: Option<u64>,
}

impl FileStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            quota: None,
        }
    }

    /// Refuse values larger than `quota` bytes
    pub fn with_quota(mut self, quota: u64) -> Self {
        self.quota = Some(quota);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", file_name))
    }

    fn write_atomic(temp: &Path, target: &Path, value: &str) -> PersistenceResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp)
            .map_err(|e| PersistenceError::Io(format!("failed to create temp file: {}", e)))?;

        file.write_all(value.as_bytes())
            .map_err(|e| PersistenceError::Io(format!("failed to write record: {}", e)))?;

        file.sync_all()
            .map_err(|e| PersistenceError::Io(format!("failed to fsync record: {}", e)))?;

        fs::rename(temp, target)
            .map_err(|e| PersistenceError::Io(format!("failed to commit record: {}", e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io(format!("failed to read {}: {}", key, e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        if let Some(limit) = self.quota {
            let size = value.len() as u64;
            if size > limit {
                return Err(PersistenceError::QuotaExceeded { size, limit });
            }
        }

        fs::create_dir_all(&self.root).map_err(|e| {
            PersistenceError::Io(format!("failed to create {}: {}", self.root.display(), e))
        })?;

        let target = self.path_for(key);
        let temp = target.with_extension("json.tmp");

        if let Err(e) = Self::write_atomic(&temp, &target, value) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        // Make the rename itself durable
        if let Ok(dir) = File::open(&self.root) {
            let _ = dir.sync_all();
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Io(format!("failed to remove {}: {}", key, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("doc", "{\"a\":1}").unwrap();
        assert_eq!(store.get("doc").unwrap(), Some("{\"a\":1}".to_string()));
    }

    #[test]
    fn test_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_creates_root_on_write() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested").join("dir"));

        store.set("doc", "x").unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_key_sanitized() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        let path = store.path_for("prompt-editor:document-state:v1");
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "prompt-editor_document-state_v1.json"
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("doc", "one").unwrap();
        store.set("doc", "two").unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["doc.json".to_string()]);
        assert_eq!(store.get("doc").unwrap(), Some("two".to_string()));
    }

    #[test]
    fn test_failed_commit_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        fs::create_dir(store.path_for("doc")).unwrap();

        let result = store.set("doc", "x");
        assert!(matches!(result, Err(PersistenceError::Io(_))));

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["doc.json".to_string()]);
    }

    #[test]
    fn test_quota() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path()).with_quota(4);

        store.set("doc", "1234").unwrap();
        let result = store.set("doc", "12345");
        assert_eq!(result, Err(PersistenceError::QuotaExceeded { size: 5, limit: 4 }));
        assert_eq!(store.get("doc").unwrap(), Some("1234".to_string()));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("doc", "x").unwrap();
        store.remove("doc").unwrap();
        store.remove("doc").unwrap();
        assert_eq!(store.get("doc").unwrap(), None);
    }
}
