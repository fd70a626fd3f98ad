//! Free-form notes with tags, and the title-keyed note book.
//!
//! Same collection discipline as [`crate::book::AddressBook`]: the title is
//! the identity key, a `BTreeMap` keeps listing order stable, and expected
//! conditions (note not found, tag already present) are outcome values.

use crate::book::{Pages, RemoveOutcome};
use crate::error::{Result, RoloError};
use crate::record::NAME_FIELD_WIDTH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Outcome of editing a note's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Edited,
    NotFound,
}

/// Outcome of appending tags to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagsAdd {
    /// How many tags were actually appended (duplicates are skipped).
    Added(usize),
    NotFound,
}

/// Normalizes a raw tag to a `#`-prefixed, trimmed form. Empty input yields
/// `None`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let text = raw.trim().trim_start_matches('#').trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("#{}", text))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    content: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Note {
    /// Builds a note. Title and content are both required to be non-empty.
    pub fn new(title: &str, content: &str, tags: &[String]) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RoloError::EmptyNote("title"));
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(RoloError::EmptyNote("content"));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().filter_map(|t| normalize_tag(t)).collect(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    fn set_content(&mut self, content: &str) {
        self.content = content.trim().to_string();
    }

    /// Appends normalized tags, skipping ones already present. Returns how
    /// many were added.
    fn extend_tags(&mut self, tags: &[String]) -> usize {
        let mut added = 0;
        for tag in tags.iter().filter_map(|t| normalize_tag(t)) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
                added += 1;
            }
        }
        added
    }

    fn matches_keyword(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }

    fn matches_tag(&self, needle: &str) -> bool {
        self.matches_keyword(needle)
            || self
                .tags
                .iter()
                .any(|t| t.trim_start_matches('#').to_lowercase().contains(needle))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blanks = " ".repeat(NAME_FIELD_WIDTH.saturating_sub(self.title.width()));
        write!(f, "{}{} : {}", self.title, blanks, self.content)?;
        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct NoteBook {
    notes: BTreeMap<String, Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut book = Self::new();
        for note in notes {
            book.add(note);
        }
        book
    }

    pub fn to_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    /// Inserts or overwrites by title. Returns the replaced note, if any.
    pub fn add(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.title.clone(), note)
    }

    pub fn find(&self, title: &str) -> Option<&Note> {
        self.notes.get(title.trim())
    }

    pub fn edit(&mut self, title: &str, new_content: &str) -> EditOutcome {
        match self.notes.get_mut(title.trim()) {
            Some(note) => {
                note.set_content(new_content);
                EditOutcome::Edited
            }
            None => EditOutcome::NotFound,
        }
    }

    pub fn remove(&mut self, title: &str) -> RemoveOutcome {
        match self.notes.remove(title.trim()) {
            Some(_) => RemoveOutcome::Removed,
            None => RemoveOutcome::NotFound,
        }
    }

    pub fn add_tags(&mut self, title: &str, tags: &[String]) -> TagsAdd {
        match self.notes.get_mut(title.trim()) {
            Some(note) => TagsAdd::Added(note.extend_tags(tags)),
            None => TagsAdd::NotFound,
        }
    }

    /// Case-insensitive scan over titles and contents.
    pub fn search_by_keyword(&self, term: &str) -> Vec<&Note> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.notes
            .values()
            .filter(|note| note.matches_keyword(&needle))
            .collect()
    }

    /// Like [`Self::search_by_keyword`] but also scans tags. A leading `#`
    /// on the term is ignored.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        let needle = tag.trim().trim_start_matches('#').to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.notes
            .values()
            .filter(|note| note.matches_tag(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Same pagination contract as [`crate::book::AddressBook::pages`].
    pub fn pages(&self, page_size: usize) -> Pages<'_, Note> {
        Pages::new(self.notes.values().collect(), page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        Note::new(title, content, &tags).unwrap()
    }

    #[test]
    fn note_requires_title_and_content() {
        assert!(matches!(
            Note::new("  ", "body", &[]),
            Err(RoloError::EmptyNote("title"))
        ));
        assert!(matches!(
            Note::new("title", "  ", &[]),
            Err(RoloError::EmptyNote("content"))
        ));
    }

    #[test]
    fn tags_are_hash_prefixed() {
        let n = note("groceries", "milk, eggs", &["food", "#shopping", "  "]);
        assert_eq!(n.tags(), ["#food", "#shopping"]);
    }

    #[test]
    fn add_overwrites_by_title() {
        let mut book = NoteBook::new();
        book.add(note("plan", "v1", &[]));
        let replaced = book.add(note("plan", "v2", &[]));

        assert!(replaced.is_some());
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("plan").unwrap().content(), "v2");
    }

    #[test]
    fn edit_changes_content_only() {
        let mut book = NoteBook::new();
        book.add(note("plan", "v1", &["work"]));

        assert_eq!(book.edit("plan", "v2"), EditOutcome::Edited);
        let edited = book.find("plan").unwrap();
        assert_eq!(edited.content(), "v2");
        assert_eq!(edited.tags(), ["#work"]);

        assert_eq!(book.edit("ghost", "x"), EditOutcome::NotFound);
    }

    #[test]
    fn remove_reports_not_found() {
        let mut book = NoteBook::new();
        book.add(note("plan", "v1", &[]));
        assert_eq!(book.remove("ghost"), RemoveOutcome::NotFound);
        assert_eq!(book.remove("plan"), RemoveOutcome::Removed);
        assert!(book.is_empty());
    }

    #[test]
    fn add_tags_skips_duplicates() {
        let mut book = NoteBook::new();
        book.add(note("plan", "v1", &["work"]));

        let outcome = book.add_tags("plan", &["#work".into(), "urgent".into()]);
        assert_eq!(outcome, TagsAdd::Added(1));
        assert_eq!(book.find("plan").unwrap().tags(), ["#work", "#urgent"]);

        assert_eq!(book.add_tags("ghost", &["x".into()]), TagsAdd::NotFound);
    }

    #[test]
    fn keyword_search_scans_title_and_content() {
        let mut book = NoteBook::new();
        book.add(note("Shopping list", "milk and eggs", &["food"]));
        book.add(note("Standup", "talk about milk quota", &[]));
        book.add(note("Empty-ish", "nothing here", &[]));

        let hits = book.search_by_keyword("MILK");
        assert_eq!(hits.len(), 2);
        // Keyword search does not look at tags.
        assert!(book.search_by_keyword("food").is_empty());
    }

    #[test]
    fn tag_search_also_scans_tags() {
        let mut book = NoteBook::new();
        book.add(note("Shopping list", "milk and eggs", &["food"]));
        book.add(note("Recipes", "food ideas", &[]));

        let hits = book.search_by_tag("#food");
        assert_eq!(hits.len(), 2);

        let hits = book.search_by_tag("FOOD");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn pages_follow_the_shared_contract() {
        let mut book = NoteBook::new();
        for i in 0..5 {
            book.add(note(&format!("note{}", i), "body", &[]));
        }
        let pages: Vec<_> = book.pages(2).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].len(), 1);
    }
}
