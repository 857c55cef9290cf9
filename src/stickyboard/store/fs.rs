use super::KeyValueStore;
use crate::error::{BoardError, Result};
use std::fs;
use std::path::PathBuf;

/// File-backed store: each key is `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(BoardError::Store(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key)?;

        // Write beside the target then rename over it, so a crash mid-write
        // leaves the previous value intact.
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read("sticky-notes").unwrap(), None);
        assert_eq!(store.load("sticky-notes", vec![1u32]).unwrap(), vec![1]);
    }

    #[test]
    fn write_creates_directory_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("board");
        let store = FileStore::new(&root);

        store.store("numbers", &vec![3u32, 1, 2]).unwrap();
        assert!(root.join("numbers.json").exists());
        assert!(!root.join(".numbers.json.tmp").exists());

        let loaded: Vec<u32> = store.load("numbers", Vec::new()).unwrap();
        assert_eq!(loaded, vec![3, 1, 2]);
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(store.key_path("../escape").is_err());
        assert!(store.key_path("").is_err());
        assert!(store.key_path(".hidden").is_err());
    }

    #[test]
    fn corrupt_payload_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.write("broken", "{not json").unwrap();
        let err = store.load::<Vec<u32>>("broken", Vec::new()).unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }
}
