use crate::domain::ValidationError;
use crate::error::{InvalidOperation, OperationResult, RegistryResult};
use crate::models::Record;
use crate::observability::RegistryMetrics;
use std::collections::HashMap;

/// In-memory store of one record kind, keyed by record ID.
///
/// The repository exclusively owns its map. It never holds two records with
/// the same ID, and every mutation requires `&mut self`; callers sharing one
/// across threads wrap it in their own lock.
#[derive(Debug)]
pub struct InMemoryRepository<R: Record> {
    records: HashMap<String, R>,
    metrics: RegistryMetrics,
}

impl<R: Record> InMemoryRepository<R> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty repository with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Store a new record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::DuplicateId` if a record with the same ID
    /// is already stored; the existing record is left untouched.
    pub fn add(&mut self, record: R) -> OperationResult<()> {
        if self.records.contains_key(record.id()) {
            self.metrics.track_rejected();
            tracing::warn!(kind = R::KIND, id = %record.id(), "Rejected duplicate record ID");
            return Err(InvalidOperation::DuplicateId {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }

        let id = record.id().to_string();
        tracing::debug!(kind = R::KIND, id = %id, "Record added");
        self.records.insert(id, record);
        self.metrics.track_added();
        Ok(())
    }

    /// Remove a record, returning whether one was stored under `id`.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.records.remove(id).is_some();
        if removed {
            self.metrics.track_removed();
            tracing::debug!(kind = R::KIND, id = %id, "Record removed");
        } else {
            tracing::debug!(kind = R::KIND, id = %id, "No record to remove");
        }
        removed
    }

    /// Look up a record by ID.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Apply a validated field change to a stored record in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::NotFound` if no record has this ID, or the
    /// `ValidationError` produced by `apply`. `apply` must leave the record
    /// unchanged when it fails.
    pub fn update<F>(&mut self, id: &str, apply: F) -> RegistryResult<()>
    where
        F: FnOnce(&mut R) -> Result<(), ValidationError>,
    {
        let Some(record) = self.records.get_mut(id) else {
            self.metrics.track_rejected();
            tracing::warn!(kind = R::KIND, id = %id, "Update target not found");
            return Err(InvalidOperation::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            }
            .into());
        };

        if let Err(e) = apply(record) {
            self.metrics.track_rejected();
            tracing::warn!(kind = R::KIND, id = %id, field = e.field(), "Rejected update: {}", e);
            return Err(e.into());
        }

        self.metrics.track_updated();
        tracing::debug!(kind = R::KIND, id = %id, "Record updated");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All stored IDs, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Counters for the operations applied to this repository.
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}
