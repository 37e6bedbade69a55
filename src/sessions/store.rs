// src/sessions/store.rs
use crate::errors::ServerError;
use crate::pipeline::ComparisonSnapshot;
use crate::sessions::token::hash_token;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

struct Entry {
    snapshot: Arc<ComparisonSnapshot>,
    stored_at: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<[u8; 32], Entry>,
    clock: u64,
}

/// Last comparison per session.
///
/// The lock is only held for map access; runs happen outside it and swap in
/// a complete snapshot, so readers see either the old or the new one.
pub struct SnapshotStore {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl SnapshotStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServerError> {
        self.inner.lock().map_err(|_| ServerError::InternalError)
    }

    /// Replaces the session's snapshot. Evicts the least recently stored
    /// session when over capacity.
    pub fn put(
        &self,
        token: &str,
        snapshot: ComparisonSnapshot,
    ) -> Result<Arc<ComparisonSnapshot>, ServerError> {
        let snapshot = Arc::new(snapshot);
        let mut inner = self.lock()?;

        inner.clock += 1;
        let stored_at = inner.clock;
        inner.entries.insert(
            hash_token(token),
            Entry {
                snapshot: Arc::clone(&snapshot),
                stored_at,
            },
        );

        while inner.entries.len() > self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => {
                    inner.entries.remove(&key);
                    tracing::debug!("evicted oldest session snapshot");
                }
                None => break,
            }
        }

        Ok(snapshot)
    }

    pub fn get(&self, token: &str) -> Result<Option<Arc<ComparisonSnapshot>>, ServerError> {
        let inner = self.lock()?;
        Ok(inner
            .entries
            .get(&hash_token(token))
            .map(|entry| Arc::clone(&entry.snapshot)))
    }

    pub fn len(&self) -> Result<usize, ServerError> {
        Ok(self.lock()?.entries.len())
    }
}
