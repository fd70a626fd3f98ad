use super::DataStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use crate::notes::{Note, NoteBook};
use crate::record::Record;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current on-disk schema version for both store files.
pub const STORE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct ContactsFile {
    version: u32,
    contacts: Vec<Record>,
}

#[derive(Serialize, Deserialize)]
struct NotesFile {
    version: u32,
    notes: Vec<Note>,
}

/// File-backed store: one JSON document per collection.
pub struct FileStore {
    contacts_path: PathBuf,
    notes_path: PathBuf,
}

impl FileStore {
    pub fn new(contacts_path: PathBuf, notes_path: PathBuf) -> Self {
        Self {
            contacts_path,
            notes_path,
        }
    }

    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }

    pub fn notes_path(&self) -> &Path {
        &self.notes_path
    }

    fn read_envelope<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RoloError::Io)?;
        let envelope = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(Some(envelope))
    }

    /// Writes to a sibling temp file, then renames over the destination.
    /// The rename is atomic on the same filesystem, so readers see either
    /// the old store or the new one, never a torn write.
    fn write_atomic<T: Serialize>(path: &Path, envelope: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let content = serde_json::to_string_pretty(envelope).map_err(RoloError::Serialization)?;
        fs::write(&tmp, content).map_err(RoloError::Io)?;
        fs::rename(&tmp, path).map_err(RoloError::Io)?;
        Ok(())
    }

    fn check_version(version: u32, path: &Path) -> Result<()> {
        if version != STORE_VERSION {
            return Err(RoloError::Store(format!(
                "unsupported store version {} in {} (expected {})",
                version,
                path.display(),
                STORE_VERSION
            )));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        match Self::read_envelope::<ContactsFile>(&self.contacts_path)? {
            Some(envelope) => {
                Self::check_version(envelope.version, &self.contacts_path)?;
                Ok(AddressBook::from_records(envelope.contacts))
            }
            None => Ok(AddressBook::new()),
        }
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        let envelope = ContactsFile {
            version: STORE_VERSION,
            contacts: book.to_records(),
        };
        Self::write_atomic(&self.contacts_path, &envelope)
    }

    fn load_notes(&self) -> Result<NoteBook> {
        match Self::read_envelope::<NotesFile>(&self.notes_path)? {
            Some(envelope) => {
                Self::check_version(envelope.version, &self.notes_path)?;
                Ok(NoteBook::from_notes(envelope.notes))
            }
            None => Ok(NoteBook::new()),
        }
    }

    fn save_notes(&mut self, notes: &NoteBook) -> Result<()> {
        let envelope = NotesFile {
            version: STORE_VERSION,
            notes: notes.to_notes(),
        };
        Self::write_atomic(&self.notes_path, &envelope)
    }
}
