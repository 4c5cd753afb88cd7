//! Generic keyed table shared by the concrete repositories.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use spothub_domain::id::{SpotId, UserId};
use spothub_domain::record::Keyed;

/// Identifier types the table can mint from its sequence.
pub(crate) trait SequenceId: Ord + Clone {
    fn from_sequence(sequence: u64) -> Self;
}

impl SequenceId for SpotId {
    fn from_sequence(sequence: u64) -> Self {
        Self::from_sequence(sequence)
    }
}

impl SequenceId for UserId {
    fn from_sequence(sequence: u64) -> Self {
        Self::from_sequence(sequence)
    }
}

struct Rows<I, T> {
    /// Last sequence number handed out. Never reused, even after deletes.
    sequence: u64,
    rows: BTreeMap<I, T>,
}

/// A mapping from generated id to record behind a single async lock.
pub(crate) struct Table<I, T> {
    inner: RwLock<Rows<I, T>>,
}

impl<I, T> Default for Table<I, T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Rows {
                sequence: 0,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<I: SequenceId, T: Clone> Table<I, T> {
    pub(crate) async fn insert(&self, value: T) -> Keyed<I, T> {
        let mut guard = self.inner.write().await;
        let rows = &mut *guard;
        // Skip ids still occupied, e.g. by a record inserted with `insert_with_id`.
        let id = loop {
            rows.sequence += 1;
            let candidate = I::from_sequence(rows.sequence);
            if !rows.rows.contains_key(&candidate) {
                break candidate;
            }
        };
        rows.rows.insert(id.clone(), value.clone());
        Keyed::new(id, value)
    }

    pub(crate) async fn insert_with_id(&self, id: I, value: T) -> Option<T> {
        self.inner.write().await.rows.insert(id, value)
    }

    pub(crate) async fn get(&self, id: &I) -> Option<T> {
        self.inner.read().await.rows.get(id).cloned()
    }

    pub(crate) async fn all(&self) -> BTreeMap<I, T> {
        self.inner.read().await.rows.clone()
    }

    pub(crate) async fn filter<F>(&self, predicate: F) -> Vec<(I, T)>
    where
        F: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|&(_, value)| predicate(value))
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect()
    }

    /// Mutate a record in place under one write lock and return the result.
    pub(crate) async fn modify<F>(&self, id: &I, change: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.inner.write().await;
        let slot = guard.rows.get_mut(id)?;
        change(slot);
        Some(slot.clone())
    }

    pub(crate) async fn remove(&self, id: &I) -> Option<T> {
        self.inner.write().await.rows.remove(id)
    }
}
