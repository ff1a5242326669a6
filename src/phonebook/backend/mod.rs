//! # Storage Backends
//!
//! A [`StorageBackend`] moves the whole contact list between memory and durable
//! storage. Loading happens once at startup and saving once at shutdown; there is
//! no incremental write path.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production storage, a single JSON file
//! - [`memory::MemBackend`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! contacts.json    # JSON array of records, in store order
//! [
//!   { "name": "Alice", "birthday": "1990-06-15", "phones": ["1234567"] },
//!   { "name": "Bob",   "birthday": null,         "phones": [] }
//! ]
//! ```
//!
//! An array keeps the store's ordering without relying on JSON object key order.
//! Names stay unique because [`ContactStore::from_records`] lets a repeated name
//! overwrite the earlier entry.

use crate::error::Result;
use crate::model::Record;
use crate::store::ContactStore;

pub mod fs;
pub mod memory;

pub trait StorageBackend {
    /// Load every persisted record. A backend with nothing stored yet returns an
    /// empty list, not an error.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Replace the persisted records with `records`.
    /// MUST be all-or-nothing (e.g. write to tmp then rename).
    fn save_records(&self, records: &[Record]) -> Result<()>;

    fn load_store(&self) -> Result<ContactStore> {
        Ok(ContactStore::from_records(self.load_records()?))
    }

    fn save_store(&self, store: &ContactStore) -> Result<()> {
        self.save_records(store.records())
    }
}
