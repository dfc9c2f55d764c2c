//! JSON file store - whole-file reads and overwrites
//!
//! Each store is a single JSON document. Writes go to a temporary sibling
//! first and are renamed over the target, so a crash mid-write leaves the
//! previous file intact.

use crate::error::{PersistenceError, PersistenceResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document; `None` when the file does not exist yet.
    pub fn read<T: DeserializeOwned>(&self) -> PersistenceResult<Option<T>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store not found, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(PersistenceError::io(&self.path, e)),
        };

        let value = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PersistenceError::serialization(&self.path, e))?;
        debug!(path = %self.path.display(), "store loaded");
        Ok(Some(value))
    }

    /// Overwrite the document with `value`.
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
            }
        }

        let tmp_path = self.tmp_path();
        {
            let file = File::create(&tmp_path).map_err(|e| PersistenceError::io(&tmp_path, e))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)
                .map_err(|e| PersistenceError::serialization(&tmp_path, e))?;
            writer
                .write_all(b"\n")
                .and_then(|_| writer.flush())
                .map_err(|e| PersistenceError::io(&tmp_path, e))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "store written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
