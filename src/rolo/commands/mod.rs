//! Command layer: the business logic behind each REPL command.
//!
//! Commands are pure functions over the in-memory books. They return a
//! structured [`CmdResult`] — leveled messages plus the records or notes to
//! display — and never print, prompt, or touch the filesystem. Malformed
//! user input surfaces as a typed [`crate::error::RoloError`] from the field
//! constructors; expected conditions (not found, duplicate, no-op) come back
//! as ordinary messages.
//!
//! - [`contact`]: contact CRUD, phone/birthday/address/email mutations
//! - [`note`]: note CRUD, tagging, note search
//! - [`search`]: free-text search across the address book
//! - [`birthdays`]: upcoming-birthday queries

use crate::book::MatchKind;
use crate::notes::Note;
use crate::record::Record;

pub mod birthdays;
pub mod contact;
pub mod note;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// One annotated contact search result.
#[derive(Debug, Clone)]
pub struct ContactHit {
    pub criteria: Vec<MatchKind>,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Contacts to display after the messages.
    pub records: Vec<Record>,
    /// Notes to display after the messages.
    pub notes: Vec<Note>,
    /// Annotated search hits (search command only).
    pub hits: Vec<ContactHit>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_hits(mut self, hits: Vec<ContactHit>) -> Self {
        self.hits = hits;
        self
    }
}
