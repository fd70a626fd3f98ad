use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::notes::NoteBook;

/// In-memory store for tests: saves keep a clone, loads hand it back.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: NoteBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteBook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        self.notes = notes.clone();
        Ok(())
    }
}
