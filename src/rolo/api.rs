//! API facade: the single entry point for every operation.
//!
//! [`RoloApi`] owns the two in-memory books and the storage backend. It
//! loads both collections when constructed, dispatches each operation to the
//! command layer, and writes the affected collection back to the store after
//! every mutating operation — the on-disk state always mirrors the last
//! completed command. Display-only operations (find, search, listings,
//! birthdays) never touch the store.
//!
//! Generic over [`DataStore`] so the CLI runs on `FileStore` while tests run
//! on `InMemoryStore`.

use crate::book::AddressBook;
use crate::commands;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::notes::NoteBook;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct RoloApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notes: NoteBook,
}

impl<S: DataStore> RoloApi<S> {
    /// Builds the facade, loading both collections from the store.
    pub fn new(store: S) -> Result<Self> {
        let book = store.load_contacts()?;
        let notes = store.load_notes()?;
        Ok(Self { store, book, notes })
    }

    /// Read access to the address book, for listings and pagination.
    pub fn contacts(&self) -> &AddressBook {
        &self.book
    }

    /// Read access to the note book.
    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    /// Hands the storage backend back, consuming the facade.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Persists both collections. The REPL calls this on exit; individual
    /// mutations already save as they go.
    pub fn save_all(&mut self) -> Result<()> {
        self.store.save_contacts(&self.book)?;
        self.store.save_notes(&self.notes)
    }

    fn save_contacts(&mut self) -> Result<()> {
        self.store.save_contacts(&self.book)
    }

    fn save_notes(&mut self) -> Result<()> {
        self.store.save_notes(&self.notes)
    }

    // --- Contacts ---

    pub fn add_contact(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let result = commands::contact::add(&mut self.book, name, phones, birthday)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn add_phones(&mut self, name: &str, phones: &[String]) -> Result<CmdResult> {
        let result = commands::contact::add_phones(&mut self.book, name, phones)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        let result = commands::contact::set_birthday(&mut self.book, name, birthday)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn set_address(&mut self, name: &str, words: &[String]) -> Result<CmdResult> {
        let result = commands::contact::set_address(&mut self.book, name, words)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::contact::add_email(&mut self.book, name, email)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn change_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::contact::change_email(&mut self.book, name, email)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn change_name(&mut self, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::contact::change_name(&mut self.book, old, new)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::contact::change_phone(&mut self.book, name, old, new)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::contact::remove_phone(&mut self.book, name, phone)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn remove_address(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contact::remove_address(&mut self.book, name)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn remove_email(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contact::remove_email(&mut self.book, name)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contact::delete(&mut self.book, name)?;
        self.save_contacts()?;
        Ok(result)
    }

    pub fn find_name(&self, name: &str) -> Result<CmdResult> {
        commands::contact::find(&self.book, name)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, term)
    }

    pub fn birthdays(&self, days: i64, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::run(&self.book, days, today)
    }

    // --- Notes ---

    pub fn add_note(&mut self, title: &str, content: &str, tags: &[String]) -> Result<CmdResult> {
        let result = commands::note::add(&mut self.notes, title, content, tags)?;
        self.save_notes()?;
        Ok(result)
    }

    pub fn edit_note(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        let result = commands::note::edit(&mut self.notes, title, content)?;
        self.save_notes()?;
        Ok(result)
    }

    pub fn delete_note(&mut self, title: &str) -> Result<CmdResult> {
        let result = commands::note::delete(&mut self.notes, title)?;
        self.save_notes()?;
        Ok(result)
    }

    pub fn add_tags(&mut self, title: &str, tags: &[String]) -> Result<CmdResult> {
        let result = commands::note::add_tags(&mut self.notes, title, tags)?;
        self.save_notes()?;
        Ok(result)
    }

    pub fn find_notes(&self, term: &str) -> Result<CmdResult> {
        commands::note::search_by_keyword(&self.notes, term)
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::note::search_by_tag(&self.notes, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn mutations_are_persisted_to_the_store() {
        let mut api = RoloApi::new(InMemoryStore::new()).unwrap();
        api.add_contact("john", &["0671234567".into()], None).unwrap();
        api.add_note("plan", "conquer", &[]).unwrap();

        // Rebuild the facade from the same store: data must survive.
        let api = RoloApi::new(api.into_store()).unwrap();
        assert_eq!(api.contacts().len(), 1);
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn display_operations_do_not_error_on_empty_books() {
        let api = RoloApi::new(InMemoryStore::new()).unwrap();
        assert!(api.find_name("ghost").is_ok());
        assert!(api.search("term").is_ok());
        assert!(api.find_notes("term").is_ok());
    }

    #[test]
    fn save_all_writes_both_collections() {
        let mut api = RoloApi::new(InMemoryStore::new()).unwrap();
        api.add_contact("john", &[], None).unwrap();
        api.save_all().unwrap();

        let store = api.into_store();
        assert_eq!(store.load_contacts().unwrap().len(), 1);
    }
}
