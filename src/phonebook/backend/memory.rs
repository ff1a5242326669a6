use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` since the phonebook is single-threaded, which lets
/// `StorageBackend` keep `&self` receivers.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Option<Vec<Record>>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `records`, as if saved by an earlier session.
    pub fn with_records(records: Vec<Record>) -> Self {
        let backend = Self::new();
        *backend.records.borrow_mut() = Some(records);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// What the last successful save wrote, `None` if nothing was ever stored.
    pub fn stored(&self) -> Option<Vec<Record>> {
        self.records.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.borrow().clone().unwrap_or_default())
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PhonebookError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        *self.records.borrow_mut() = Some(records.to_vec());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct BackendFixture {
        pub records: Vec<Record>,
    }

    impl Default for BackendFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(format!("Contact {}", i + 1));
                record
                    .add_phone(&format!("{:07}", 5550000 + i))
                    .unwrap();
                self.records.push(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name);
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.records.push(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, birthday: &str) -> Self {
            let record = Record::with_birthday(name, birthday).unwrap();
            self.records.push(record);
            self
        }

        pub fn build(self) -> MemBackend {
            MemBackend::with_records(self.records)
        }
    }
}
