//! Storage abstraction for the two collections.
//!
//! The [`DataStore`] trait hides where the address book and the note book
//! live. Persistence is whole-collection: a save rewrites the entire store
//! for that collection, and a load materializes it from scratch. Two
//! implementations:
//!
//! - [`fs::FileStore`]: production. One versioned JSON file per collection,
//!   written to a temp file and atomically renamed into place so a crash
//!   mid-save never leaves a torn store behind.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::book::AddressBook;
use crate::error::Result;
use crate::notes::NoteBook;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the collections.
pub trait DataStore {
    /// Load the address book; an absent store yields an empty book.
    fn load_contacts(&self) -> Result<AddressBook>;

    /// Persist the whole address book.
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the note book; an absent store yields an empty book.
    fn load_notes(&self) -> Result<NoteBook>;

    /// Persist the whole note book.
    fn save_notes(&mut self, notes: &NoteBook) -> Result<()>;
}
