//! # Phonebook Architecture
//!
//! Phonebook is a small **contact book library** with an interactive command-line
//! client on top. It stores names, phone numbers and birthdays, persists them to a
//! single file, and answers lookups, searches and birthday countdowns.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results and error messages   │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the ContactStore for the session                    │
//! │  - Loads at startup, saves at shutdown                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, model.rs, fields.rs)                         │
//! │  - ContactStore, Record, validated field kinds              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (backend/)                                   │
//! │  - StorageBackend trait                                     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`error::Result`]. Invalid input, unknown
//! contacts and missing arguments are meant to be shown to the user and the
//! session goes on; I/O and serialization failures are fatal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The in-memory contact store
//! - [`model`]: `Record`
//! - [`fields`]: Field kinds and their validation (`Name`, `Phone`, `Birthday`)
//! - [`backend`]: Persistence
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
