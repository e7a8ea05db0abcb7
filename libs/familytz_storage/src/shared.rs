// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tracing::debug;

use crate::{Storage, StoreError};

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// A storage bound to one suite, telling its listeners about every write.
///
/// Listeners stand in for the widget reload signal: they receive the key that
/// was written, after the write succeeded.
pub struct SharedStore<S> {
    storage: S,
    suite: String,
    listeners: Vec<Listener>,
}

impl<S: Storage> SharedStore<S> {
    pub fn new(storage: S, suite: impl Into<String>) -> Self {
        Self {
            storage,
            suite: suite.into(),
            listeners: Vec::new(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn on_write<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.storage.read(&self.suite, key)
    }

    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.storage.write(&self.suite, key, bytes)?;
        debug!("Saved {} bytes to {}/{}", bytes.len(), self.suite, key);
        for listener in &self.listeners {
            listener(key);
        }
        Ok(())
    }
}

impl<S> fmt::Debug for SharedStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("suite", &self.suite)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_listeners_see_each_write() {
        let mut store = SharedStore::new(MemoryStorage::new(), "group.test");
        let keys = Arc::new(Mutex::new(Vec::new()));
        let count = Arc::new(AtomicUsize::new(0));

        let seen = keys.clone();
        store.on_write(move |key| seen.lock().unwrap().push(key.to_string()));
        let counter = count.clone();
        store.on_write(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.write("a", b"1").unwrap();
        store.write("b", b"2").unwrap();

        assert_eq!(*keys.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(store.read("a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.storage().read("group.test", "b").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_failed_write_does_not_notify() {
        let mut store = SharedStore::new(crate::FileStorage::new("/nonexistent"), "..");
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        store.on_write(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.write("key", b"[]").is_err());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
