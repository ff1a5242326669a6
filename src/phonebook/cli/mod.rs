//! # CLI Layer
//!
//! This module is **one possible UI client** for the phonebook library: an
//! interactive, line-oriented loop over stdin/stdout.
//!
//! It is the only place in the codebase that:
//! - Reads user input and writes to stdout
//! - Decides when the session ends
//! - Turns errors into user-facing one-liners
//!
//! ## Structure
//!
//! - `setup`: grammar of one input line (clap, applied per line)
//! - `commands`: startup, the read-eval-print loop and dispatch to `PhonebookApi`
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
