use crate::book::RemoveOutcome;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::{EditOutcome, Note, NoteBook, TagsAdd};

/// Creates a note, overwriting any note with the same title.
pub fn add(
    notes: &mut NoteBook,
    title: &str,
    content: &str,
    tags: &[String],
) -> Result<CmdResult> {
    let note = Note::new(title, content, tags)?;
    let replaced = notes.add(note.clone());

    let mut result = CmdResult::default();
    if replaced.is_some() {
        result.add_message(CmdMessage::warning(format!(
            "note '{}' has been replaced",
            note.title()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "note '{}' has been added",
            note.title()
        )));
    }
    result.notes = vec![note];
    Ok(result)
}

/// Replaces a note's content, leaving title and tags alone.
pub fn edit(notes: &mut NoteBook, title: &str, new_content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match notes.edit(title, new_content) {
        EditOutcome::Edited => {
            result.add_message(CmdMessage::success(format!(
                "note '{}' has been changed",
                title.trim()
            )));
            if let Some(note) = notes.find(title) {
                result.notes = vec![note.clone()];
            }
        }
        EditOutcome::NotFound => result.add_message(CmdMessage::warning(format!(
            "note '{}' not found",
            title.trim()
        ))),
    }
    Ok(result)
}

pub fn delete(notes: &mut NoteBook, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match notes.remove(title) {
        RemoveOutcome::Removed => result.add_message(CmdMessage::success(format!(
            "note '{}' has been deleted",
            title.trim()
        ))),
        RemoveOutcome::NotFound => result.add_message(CmdMessage::warning(format!(
            "note '{}' not found",
            title.trim()
        ))),
    }
    Ok(result)
}

pub fn add_tags(notes: &mut NoteBook, title: &str, tags: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match notes.add_tags(title, tags) {
        TagsAdd::Added(count) => {
            result.add_message(CmdMessage::success(format!(
                "{} tag(s) added to note '{}'",
                count,
                title.trim()
            )));
            if let Some(note) = notes.find(title) {
                result.notes = vec![note.clone()];
            }
        }
        TagsAdd::NotFound => result.add_message(CmdMessage::warning(format!(
            "note '{}' not found",
            title.trim()
        ))),
    }
    Ok(result)
}

pub fn search_by_keyword(notes: &NoteBook, term: &str) -> Result<CmdResult> {
    let hits: Vec<Note> = notes.search_by_keyword(term).into_iter().cloned().collect();
    Ok(listing(hits, term))
}

pub fn search_by_tag(notes: &NoteBook, tag: &str) -> Result<CmdResult> {
    let hits: Vec<Note> = notes.search_by_tag(tag).into_iter().cloned().collect();
    Ok(listing(hits, tag))
}

fn listing(hits: Vec<Note>, term: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "no matching notes found for '{}'",
            term
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} note(s) found for '{}'",
            hits.len(),
            term
        )));
        result.notes = hits;
    }
    result
}
