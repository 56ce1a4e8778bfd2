use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chromatone_contracts::{KeyValueStore, StorageError};
use rand::Rng;
use tracing::debug;

/// A single JSON object on disk mapping keys to values.
///
/// Every call re-reads the file, so several handles on one path see each
/// other's writes. A missing file reads as empty. Writes go to a sibling
/// temp file that is then renamed over the document.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(io_error(&self.path, err)),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn write_all(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| io_error(parent, err))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());
        let tmp = self.path.with_file_name(format!(
            "{file_name}.tmp-{:08x}",
            rand::rng().random::<u32>()
        ));

        let written = write_file(&tmp, json.as_bytes())
            .map_err(|err| io_error(&tmp, err))
            .and_then(|()| {
                fs::rename(&tmp, &self.path)
                    .map_err(|err| io_error(&self.path, err))
            });
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        debug!(path = ?self.path, entries = entries.len(), "Wrote store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_all()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("x").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn writes_are_visible_to_other_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let mut writer = FileStore::new(&path);
        writer.set("PRESET_a", "{}").unwrap();

        let reader = FileStore::new(&path);
        assert_eq!(reader.get("PRESET_a").unwrap().as_deref(), Some("{}"));

        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_name().to_string_lossy().contains(".tmp-")
            })
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(
            store.get("x"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the document should be makes the rename fail
        let path = dir.path().join("store.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupant"), "x").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.write_all(&BTreeMap::new()),
            Err(StorageError::Io { .. })
        ));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_name().to_string_lossy().contains(".tmp-")
            })
            .collect();
        assert!(leftovers.is_empty());
    }
}
