//! The record store: two independent, newest-first ordered collections.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use kardex_core::models::evaluation::NursingEvaluation;
use kardex_core::models::surgical_report::SurgicalReport;

use crate::persist::{CollectionKey, Persistence};

/// A record kind the store can hold.
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    fn record_id(&self) -> &str;
}

impl StoredRecord for NursingEvaluation {
    fn record_id(&self) -> &str {
        self.id()
    }
}

impl StoredRecord for SurgicalReport {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Ordered collection of committed records, newest first. Every mutation
/// is mirrored to the persistence collaborator; the in-memory state stays
/// authoritative regardless of persistence outcome.
pub struct RecordStore<T: StoredRecord> {
    key: CollectionKey,
    records: Vec<T>,
    persistence: Arc<dyn Persistence>,
}

impl<T: StoredRecord> RecordStore<T> {
    /// Seed the collection from persistence. Absent or corrupt data yields
    /// an empty collection, never an error.
    pub fn open(key: CollectionKey, persistence: Arc<dyn Persistence>) -> Self {
        let records = match persistence.load(key) {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        collection = key.as_str(),
                        error = %e,
                        "stored collection is corrupt, starting empty",
                    );
                    Vec::new()
                }
            },
        };
        tracing::info!(collection = key.as_str(), count = records.len(), "collection loaded");
        Self { key, records, persistence }
    }

    /// Replace in place when the id is already present (position
    /// unchanged); prepend otherwise, so the newest record lists first.
    pub fn upsert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.record_id() == record.record_id()) {
            Some(slot) => *slot = record,
            None => self.records.insert(0, record),
        }
        self.sync();
    }

    /// Delete by id; unknown ids are a silent no-op. The user-facing
    /// confirmation happens at the UI boundary, not here.
    pub fn remove(&mut self, id: &str) {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        if self.records.len() != before {
            self.sync();
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sync(&self) {
        match serde_json::to_string_pretty(&self.records) {
            Ok(payload) => self.persistence.save(self.key, &payload),
            Err(e) => {
                tracing::warn!(collection = self.key.as_str(), error = %e, "failed to serialize collection");
            }
        }
    }
}
