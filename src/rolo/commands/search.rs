use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactHit};
use crate::error::Result;

/// Free-text search across the whole address book. Each hit carries every
/// criterion it matched on so the UI can label the lines.
pub fn run(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("searching string is required"));
        return Ok(result);
    }

    let hits: Vec<ContactHit> = book
        .search(term)
        .into_iter()
        .map(|hit| ContactHit {
            criteria: hit.criteria,
            record: hit.record.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "nothing was found for your request '{}'",
            term
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "data found for your request '{}'",
            term
        )));
        result.hits = hits;
    }
    Ok(result)
}
