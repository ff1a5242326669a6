//! # Contact Store
//!
//! [`ContactStore`] is the in-memory collection of all [`Record`]s, keyed by name.
//! It owns its records outright: callers borrow them through [`ContactStore::get`]
//! and friends, and nothing outside the store keeps a handle to a record.
//!
//! ## Ordering
//!
//! Records are kept in the order their names were first added. Overwriting an
//! existing name replaces the record in place, so the listing order is stable across
//! a session and across save/load cycles. Every listing operation ([`ContactStore::iter`],
//! [`ContactStore::search`], [`ContactStore::pages`]) follows that order.
//!
//! ## Persistence
//!
//! The store itself knows nothing about disk. See [`crate::backend`] for how it gets
//! loaded and saved.

use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::collections::HashMap;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    records: Vec<Record>,
    by_name: HashMap<String, usize>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records in order. A later record with a name seen
    /// before overwrites the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.add_record(record);
        }
        store
    }

    /// Inserts a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.by_name.get(record.name()) {
            Some(&idx) => self.records[idx] = record,
            None => {
                self.by_name
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Record> {
        self.by_name
            .get(name)
            .map(|&idx| &self.records[idx])
            .ok_or_else(|| PhonebookError::ContactNotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        match self.by_name.get(name) {
            Some(&idx) => Ok(&mut self.records[idx]),
            None => Err(PhonebookError::ContactNotFound(name.to_string())),
        }
    }

    /// Records whose name contains `query` (ignoring case) or that have a phone
    /// containing `query`. Each record is returned once.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name().to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Lazily walks the records in groups of `page_size`. The last page may be short.
    pub fn pages(&self, page_size: usize) -> impl Iterator<Item = &[Record]> {
        self.records.chunks(page_size.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
