// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::trace;

use crate::StoreError;

/// A key/value blob store partitioned into suites.
///
/// A suite plays the role of an app group: every process that opens the same
/// suite sees the same keys.
pub trait Storage: Send + Sync {
    fn read(&self, suite: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn write(&self, suite: &str, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// In-process storage, shareable between threads.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, suite: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(&(suite.to_string(), key.to_string())).cloned())
    }

    fn write(&self, suite: &str, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert((suite.to_string(), key.to_string()), bytes.to_vec());
        Ok(())
    }
}

/// Storage backed by one file per key at `<root>/<suite>/<key>.json`.
///
/// Writes go through a temporary file that is renamed into place, so a reader
/// in another process sees either the old or the new blob.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, suite: &str, key: &str) -> Result<PathBuf, StoreError> {
        for part in [suite, key] {
            if part.is_empty() || part.contains(['/', '\\']) || part == "." || part == ".." {
                return Err(StoreError::InvalidName(part.to_string()));
            }
        }
        Ok(self.root.join(suite).join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn read(&self, suite: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(suite, key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                trace!("Read {} bytes from {:?}", bytes.len(), path);
                Ok(Some(bytes))
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, suite: &str, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(suite, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, bytes)?;
        fs::rename(&staging, &path)?;
        trace!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}
