//! File-backed blob store built on capability-scoped directory access.
//!
//! Each key is stored as `<key>.json` inside one directory. Writes go to a
//! sibling temporary file first and are renamed into place, so readers never
//! observe a half-written blob.

use crate::board::{
    config::StoreConfig,
    ports::{BlobStore, BlobStoreError, BlobStoreResult},
};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

const BLOB_EXTENSION: &str = "json";

/// Blob store persisting each key as a file in a single directory.
#[derive(Debug)]
pub struct FileBlobStore {
    dir: Dir,
}

impl FileBlobStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> BlobStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(BlobStoreError::io)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(BlobStoreError::io)?;
        Ok(Self { dir })
    }

    /// Opens the store at the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn from_config(config: &StoreConfig) -> BlobStoreResult<Self> {
        Self::open(&config.data_dir)
    }
}

/// Maps a key to its file name, rejecting anything that could escape the
/// directory or collide with a temporary file.
fn blob_file_name(key: &str) -> BlobStoreResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !is_valid {
        return Err(BlobStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{BLOB_EXTENSION}"))
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let file_name = blob_file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobStoreError::io(err)),
        }
    }

    fn put(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let file_name = blob_file_name(key)?;
        let temp_name = format!("{file_name}.tmp");
        self.dir
            .write(&temp_name, value)
            .map_err(BlobStoreError::io)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(BlobStoreError::io)
    }

    fn remove(&self, key: &str) -> BlobStoreResult<()> {
        let file_name = blob_file_name(key)?;
        match self.dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(BlobStoreError::io(err)),
        }
    }
}
