//! Terminal output for the shell. Everything that touches stdout lives here
//! or in `main.rs`.

use colored::*;
use console::Term;
use chrono::Local;
use rolo::book::{MatchKind, Pages};
use rolo::commands::{CmdMessage, CmdResult, ContactHit, MessageLevel};
use rolo::error::Result;
use rolo::record::{BirthdayProximity, Record};
use std::fmt;
use std::io::Write;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints a whole command result: messages first, then any records, search
/// hits, or notes it carries.
pub fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    for record in &result.records {
        println!("\t{}", record_line(record));
    }
    print_hits(&result.hits);
    for note in &result.notes {
        println!("\t{}", note);
    }
}

/// Contacts with a birthday today or this week stand out in listings.
fn record_line(record: &Record) -> ColoredString {
    let line = record.to_string();
    match record.birthday_proximity(Local::now().date_naive()) {
        Some(BirthdayProximity::Today) => line.magenta(),
        Some(BirthdayProximity::Soon) => line.cyan(),
        _ => line.normal(),
    }
}

/// Search hits with one line per matched criterion, labels colored by kind.
fn print_hits(hits: &[ContactHit]) {
    for hit in hits {
        for criterion in &hit.criteria {
            let label = format!("[{:>14}] ", criterion.to_string());
            let label = match criterion {
                MatchKind::Phone | MatchKind::Email => label.blue(),
                MatchKind::Birthday => label.magenta(),
                MatchKind::Name => label.cyan(),
                MatchKind::Address => label.white(),
            };
            println!("\t{}{}", label, hit.record);
        }
    }
}

/// Paged listing. Prints one page at a time and waits for Enter between
/// pages, in the style of the classic terminal pager.
pub fn print_paginated<T: fmt::Display>(
    header: &str,
    pages: Pages<'_, T>,
    total: usize,
) -> Result<()> {
    println!("  === {} ===", header);
    let term = Term::stdout();
    let mut shown = 0;
    for page in pages {
        for item in &page {
            println!("{}", item);
        }
        shown += page.len();
        if shown < total {
            print!("  Press Enter for next page: ");
            std::io::stdout().flush()?;
            term.read_line()?;
        }
    }
    println!("  --- End of List ---");
    Ok(())
}
