//! # In-Memory Record Store
//!
//! Create/read storage with generated ids. Ids start at 1 and are never
//! reused.

use std::collections::BTreeMap;
use std::sync::RwLock;

use thiserror::Error;

/// Result type for record store operations
pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("Record not found: {0}")]
    NotFound(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A record with a store-generated numeric id
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> u64;
    fn assign_id(&mut self, id: u64);
}

/// Thread-safe store keyed by generated id
#[derive(Debug)]
pub struct RecordStore<T: Record> {
    inner: RwLock<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    next_id: u64,
    records: BTreeMap<u64, T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, ignoring any id it carries
    pub fn create(&self, mut record: T) -> RecordResult<T> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RecordError::Internal("Lock poisoned".into()))?;

        let id = inner.next_id;
        inner.next_id += 1;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn get(&self, id: u64) -> RecordResult<T> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RecordError::Internal("Lock poisoned".into()))?;

        inner.records.get(&id).cloned().ok_or(RecordError::NotFound(id))
    }

    /// All records in id order
    pub fn list(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|inner| inner.records.values().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fact, Rule};

    #[test]
    fn test_generated_ids() {
        let store = RecordStore::new();

        let a = store.create(Fact::new("(a)")).unwrap();
        let b = store.create(Fact { id: 99, fact: "(b)".into() }).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get(2).unwrap().fact, "(b)");
        assert!(matches!(store.get(99), Err(RecordError::NotFound(99))));
    }

    #[test]
    fn test_list_in_id_order() {
        let store = RecordStore::new();
        store.create(Rule::new("(a)", "(assert (b))")).unwrap();
        store.create(Rule::new("(b)", "(assert (c))")).unwrap();

        let rules = store.list();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].condition, "(a)");
        assert_eq!(rules[1].body, "(assert (c))");
    }
}
