//! # API Facade
//!
//! [`PhonebookApi`] is the single entry point a UI uses. It owns the
//! [`ContactStore`] for the whole session together with the [`StorageBackend`] it
//! came from:
//!
//! 1. [`PhonebookApi::load`] reads the persisted contacts once at startup
//! 2. every operation dispatches to a `commands::*::run` function against the store
//! 3. [`PhonebookApi::save`] writes the whole store back at shutdown
//!
//! The API does no formatting and no terminal I/O; it returns [`CmdResult`]s.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `PhonebookApi<FsBackend>`
//! - Testing: `PhonebookApi<MemBackend>`

use crate::backend::StorageBackend;
use crate::commands;
use crate::error::Result;
use crate::store::{ContactStore, DEFAULT_PAGE_SIZE};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

pub struct PhonebookApi<B: StorageBackend> {
    store: ContactStore,
    backend: B,
    page_size: usize,
}

impl<B: StorageBackend> PhonebookApi<B> {
    /// Loads the persisted contacts. Nothing persisted yet gives an empty store.
    pub fn load(backend: B) -> Result<Self> {
        let store = backend.load_store()?;
        info!(contacts = store.len(), "contact book loaded");
        Ok(Self {
            store,
            backend,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> Result<CmdResult> {
        debug!(name, "add");
        commands::add::run(&mut self.store, name, phone, birthday)
    }

    pub fn change(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!(name, "change");
        commands::change::run(&mut self.store, name, phone)
    }

    pub fn phone(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.store, name)
    }

    pub fn birthday(&self, name: &str) -> Result<CmdResult> {
        self.birthday_on(name, Local::now().date_naive())
    }

    pub fn birthday_on(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::run(&self.store, name, today)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::show::run(&self.store, self.page_size)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        debug!(query, "search");
        commands::search::run(&self.store, query)
    }

    /// Writes the whole store through the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save_store(&self.store)?;
        info!(contacts = self.store.len(), "contact book saved");
        Ok(())
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
