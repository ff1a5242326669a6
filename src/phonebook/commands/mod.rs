//! # Commands
//!
//! One module per user-facing operation. Each `run` function takes the
//! [`ContactStore`](crate::store::ContactStore) plus plain Rust arguments and returns a
//! [`CmdResult`]: the records it listed, the value it looked up and the messages a UI should show.
//!
//! Nothing in here prints, reads input, or touches the disk.

use crate::fields::Phone;
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod phone;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub listed_pages: Vec<Vec<Record>>,
    pub phone: Option<Phone>,
    pub days_to_birthday: Option<i64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.listed_pages = pages;
        self
    }
}
