use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rolo::api::RoloApi;
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::store::fs::FileStore;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod print;

use args::Cli;
use print::{print_paginated, print_result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    AddContact,
    AddPhone,
    AddBirthday,
    AddAddress,
    AddEmail,
    ChangeName,
    ChangePhone,
    ChangeEmail,
    DeletePhone,
    DeleteContact,
    DeleteAddress,
    DeleteEmail,
    FindName,
    Birthdays,
    Search,
    Show,
    AddNote,
    EditNote,
    DeleteNote,
    AddTag,
    FindNote,
    FindTag,
    ShowNotes,
    Hello,
    Help,
    Exit,
}

/// First-token dispatch table. Several spellings map to the same command so
/// muscle memory from other assistants keeps working.
static COMMANDS: Lazy<HashMap<&'static str, Command>> = Lazy::new(|| {
    use Command::*;
    let table: &[(&[&str], Command)] = &[
        (&["add_contact", "add_record"], AddContact),
        (&["add_phone", "add_phones"], AddPhone),
        (&["add_birthday", "change_birthday"], AddBirthday),
        (&["add_address", "change_address"], AddAddress),
        (&["add_email"], AddEmail),
        (&["change_name"], ChangeName),
        (&["change_phone", "edit_phone"], ChangePhone),
        (&["change_email"], ChangeEmail),
        (&["delete_phone", "del_phone"], DeletePhone),
        (
            &["delete_contact", "del_contact", "delete_record", "del_record"],
            DeleteContact,
        ),
        (&["delete_address", "del_address"], DeleteAddress),
        (&["delete_email", "del_email"], DeleteEmail),
        (&["find_name", "name"], FindName),
        (&["birthdays", "birthday", "bd"], Birthdays),
        (&["search", "seek", "find_any"], Search),
        (&["show", "show_all", "list"], Show),
        (&["add_note", "note_add"], AddNote),
        (&["edit_note", "change_note"], EditNote),
        (&["delete_note", "del_note"], DeleteNote),
        (&["add_tag", "tag_add"], AddTag),
        (&["find_note"], FindNote),
        (&["find_tag"], FindTag),
        (&["show_notes", "list_notes"], ShowNotes),
        (&["hello", "hi"], Hello),
        (&["help"], Help),
        (&["exit", "close", "good_bye"], Exit),
    ];
    let mut map = HashMap::new();
    for (aliases, command) in table {
        for alias in *aliases {
            map.insert(*alias, *command);
        }
    }
    map
});

struct AppContext {
    api: RoloApi<FileStore>,
    page_size: usize,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    println!("{}", greeting());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!(">>> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like `exit`.
            ctx.api.save_all()?;
            println!("Good bye!");
            return Ok(());
        }

        match dispatch(&mut ctx, &line) {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            // Bad field input keeps the session alive.
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir(),
    };

    let config = RoloConfig::load(&data_dir).unwrap_or_default();
    let page_size = cli.page_size.unwrap_or(config.page_size);
    let contacts_file = cli
        .contacts_file
        .clone()
        .unwrap_or_else(|| config.contacts_file.clone());
    let notes_file = cli
        .notes_file
        .clone()
        .unwrap_or_else(|| config.notes_file.clone());

    let store = FileStore::new(data_dir.join(contacts_file), data_dir.join(notes_file));
    let api = RoloApi::new(store)?;

    Ok(AppContext { api, page_size })
}

fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("com", "rolo", "rolo") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".rolo"),
    }
}

enum Flow {
    Continue,
    Exit,
}

fn dispatch(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(first) = tokens.first() else {
        return Ok(Flow::Continue);
    };

    let Some(&command) = COMMANDS.get(first.to_lowercase().as_str()) else {
        println!("{}", "Unknown command. Try again".red());
        return Ok(Flow::Continue);
    };
    let args = &tokens[1..];

    match command {
        Command::AddContact => with_name(args, |name, rest| {
            // A trailing dd-mm-YYYY token is the birthday, everything before
            // it is phone numbers.
            let (phones, birthday) = match rest.last() {
                Some(last) if looks_like_birthday(last) => {
                    (&rest[..rest.len() - 1], Some(last.as_str()))
                }
                _ => (rest, None),
            };
            ctx.api.add_contact(name, phones, birthday)
        })?,
        Command::AddPhone => with_name(args, |name, rest| ctx.api.add_phones(name, rest))?,
        Command::AddBirthday => with_two(args, |name, birthday| {
            ctx.api.set_birthday(name, birthday)
        })?,
        Command::AddAddress => with_name(args, |name, rest| ctx.api.set_address(name, rest))?,
        Command::AddEmail => with_two(args, |name, email| ctx.api.add_email(name, email))?,
        Command::ChangeName => with_two(args, |old, new| ctx.api.change_name(old, new))?,
        Command::ChangePhone => with_three(args, |name, old, new| {
            ctx.api.change_phone(name, old, new)
        })?,
        Command::ChangeEmail => with_two(args, |name, email| ctx.api.change_email(name, email))?,
        Command::DeletePhone => with_two(args, |name, phone| ctx.api.remove_phone(name, phone))?,
        Command::DeleteContact => with_one(args, |name| ctx.api.delete_contact(name))?,
        Command::DeleteAddress => with_one(args, |name| ctx.api.remove_address(name))?,
        Command::DeleteEmail => with_one(args, |name| ctx.api.remove_email(name))?,
        Command::FindName => with_one(args, |name| ctx.api.find_name(name))?,
        Command::Birthdays => {
            let days = match args.first() {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(days) if days >= 0 => days,
                    _ => {
                        println!("{}", "days must be a non-negative number".red());
                        return Ok(Flow::Continue);
                    }
                },
                None => 0,
            };
            let result = ctx.api.birthdays(days, Local::now().date_naive())?;
            print_result(&result);
        }
        Command::Search => {
            let term = args.join(" ");
            let result = ctx.api.search(&term)?;
            print_result(&result);
        }
        Command::Show => {
            let page_size = parse_page_size(args, ctx.page_size, ctx.api.contacts().len());
            let book = ctx.api.contacts();
            print_paginated("Address book", book.pages(page_size), book.len())?;
        }
        Command::AddNote => with_name(args, |title, rest| {
            // '#'-prefixed words are tags, the rest is the content.
            let (tags, words): (Vec<String>, Vec<String>) =
                rest.iter().cloned().partition(|word| word.starts_with('#'));
            ctx.api.add_note(title, &words.join(" "), &tags)
        })?,
        Command::EditNote => with_name(args, |title, rest| {
            ctx.api.edit_note(title, &rest.join(" "))
        })?,
        Command::DeleteNote => with_one(args, |title| ctx.api.delete_note(title))?,
        Command::AddTag => with_name(args, |title, tags| ctx.api.add_tags(title, tags))?,
        Command::FindNote => with_one(args, |term| ctx.api.find_notes(term))?,
        Command::FindTag => with_one(args, |tag| ctx.api.find_notes_by_tag(tag))?,
        Command::ShowNotes => {
            let page_size = parse_page_size(args, ctx.page_size, ctx.api.notes().len());
            let notes = ctx.api.notes();
            print_paginated("Notes", notes.pages(page_size), notes.len())?;
        }
        Command::Hello => println!("{}", greeting()),
        Command::Help => println!("{}", HELP_TEXT),
        Command::Exit => {
            ctx.api.save_all()?;
            println!("Good bye!");
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

// --- Argument plumbing -------------------------------------------------

fn not_enough_params() {
    println!(
        "{}\n\tFormat: '<command> <name> <args>'\n\tUse 'help' for information",
        "not enough params".red()
    );
}

fn with_one<F>(args: &[String], action: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<rolo::commands::CmdResult>,
{
    match args.first() {
        Some(first) => print_result(&action(first)?),
        None => not_enough_params(),
    }
    Ok(())
}

fn with_two<F>(args: &[String], action: F) -> Result<()>
where
    F: FnOnce(&str, &str) -> Result<rolo::commands::CmdResult>,
{
    match args {
        [first, second, ..] => print_result(&action(first, second)?),
        _ => not_enough_params(),
    }
    Ok(())
}

fn with_three<F>(args: &[String], action: F) -> Result<()>
where
    F: FnOnce(&str, &str, &str) -> Result<rolo::commands::CmdResult>,
{
    match args {
        [first, second, third, ..] => print_result(&action(first, second, third)?),
        _ => not_enough_params(),
    }
    Ok(())
}

/// First arg is the name, the rest goes to the command as-is.
fn with_name<F>(args: &[String], action: F) -> Result<()>
where
    F: FnOnce(&str, &[String]) -> Result<rolo::commands::CmdResult>,
{
    match args.split_first() {
        Some((name, rest)) => print_result(&action(name, rest)?),
        None => not_enough_params(),
    }
    Ok(())
}

fn parse_page_size(args: &[String], default: usize, total: usize) -> usize {
    match args.first().and_then(|raw| raw.parse::<usize>().ok()) {
        Some(n) => n,
        None if default > 0 => default,
        // Page size 0 in config means "everything on one page".
        None => total.max(1),
    }
}

/// dd-mm-YYYY, checked loosely here; real validation happens in the core.
fn looks_like_birthday(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10 && bytes[2] == b'-' && bytes[5] == b'-'
}

fn greeting() -> String {
    format!(
        "{}\t\tType 'help' for information\n   How can I help you?",
        "  === Rolo assistant ===  ".blue()
    )
}

const HELP_TEXT: &str = "\
Contacts:
  add_contact <name> [phone ...] [dd-mm-YYYY]   create a contact
  add_phone <name> <phone ...>                  add phone numbers
  add_birthday <name> <dd-mm-YYYY>              set the birthday
  add_address <name> <address words>            set the address
  add_email <name> <email>                      set the email (first time)
  change_name <old> <new>                       rename, keeping phones and birthday
  change_phone <name> <old> <new>               replace one phone number
  change_email <name> <email>                   replace the email
  delete_phone <name> <phone>                   remove one phone number
  delete_address <name> | delete_email <name>   clear a field
  delete_contact <name>                         remove the whole contact
  find_name <name>                              show one contact
  birthdays [days]                              birthdays today or in the window
  search <text>                                 free-text search over everything
  show [n]                                      list contacts, n per page

Notes:
  add_note <title> <content words> [#tag ...]   create a note
  edit_note <title> <new content>               replace the content
  delete_note <title>                           remove a note
  add_tag <title> <tag ...>                     attach tags
  find_note <keyword> | find_tag <tag>          search notes
  show_notes [n]                                list notes, n per page

Other:
  hello | help | exit";
