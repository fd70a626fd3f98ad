use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

/// Lists contacts whose next birthday falls within `days` days of `today`
/// (zero means birthdays today).
pub fn run(book: &AddressBook, days: i64, today: NaiveDate) -> Result<CmdResult> {
    let window = if days == 0 {
        "today".to_string()
    } else {
        format!("in the next {} days", days)
    };

    let hits: Vec<_> = book
        .upcoming_birthdays(days, today)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "there are no contacts whose birthday is {}",
            window
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "contacts whose birthday is {}",
            window
        )));
        result.records = hits;
    }
    Ok(result)
}
