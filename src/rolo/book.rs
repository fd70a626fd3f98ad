//! The address book: a name-keyed collection of contact records.
//!
//! Keys are the canonical (title-cased) name strings, so any case variant of
//! a name resolves to the same record as long as lookups go through
//! [`Name::new`]. A `BTreeMap` keeps iteration in key order at all times,
//! which also makes paginated listing deterministic.

use crate::fields::Name;
use crate::record::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of removing an entry by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Outcome of renaming an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    NotFound,
}

/// Which criterion matched during a free-text search. A record can match on
/// several criteria at once; each produces its own annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Phone,
    Birthday,
    Name,
    Email,
    Address,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Phone => "Phone match",
            Self::Birthday => "Birthday match",
            Self::Name => "Name match",
            Self::Email => "Email match",
            Self::Address => "Address match",
        };
        f.write_str(label)
    }
}

/// One search result: the record plus every criterion it matched on.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub record: &'a Record,
    pub criteria: Vec<MatchKind>,
}

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from a flat record list, re-keying by canonical name.
    /// Later duplicates win, mirroring insert semantics.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add(record);
        }
        book
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Inserts or overwrites by name key. Returns the replaced record, if
    /// any.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    pub fn find(&self, name: &Name) -> Option<&Record> {
        self.records.get(name.as_str())
    }

    pub fn find_mut(&mut self, name: &Name) -> Option<&mut Record> {
        self.records.get_mut(name.as_str())
    }

    pub fn remove(&mut self, name: &Name) -> RemoveOutcome {
        match self.records.remove(name.as_str()) {
            Some(_) => RemoveOutcome::Removed,
            None => RemoveOutcome::NotFound,
        }
    }

    /// Re-keys a record under a new name. The new record carries over the
    /// old one's phones and birthday; address and email do not survive a
    /// rename.
    pub fn rename(&mut self, old: &Name, new: Name) -> RenameOutcome {
        let Some(existing) = self.records.remove(old.as_str()) else {
            return RenameOutcome::NotFound;
        };

        let mut renamed = Record::new(new);
        if let Some(bd) = existing.birthday() {
            renamed.set_birthday(*bd);
        }
        for phone in existing.phones() {
            renamed.add_phone(phone.clone());
        }
        self.add(renamed);
        RenameOutcome::Renamed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// A finite, restartable sequence of pages in key order, each of up to
    /// `page_size` records, covering every record exactly once. A zero page
    /// size is clamped to one so the sequence stays finite.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self.records.values().collect(), page_size)
    }

    /// Case-insensitive scan over all records. Criteria are independent: one
    /// record may match on several of them. The phone criterion only applies
    /// to all-digit terms.
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let all_digits = needle.chars().all(|c| c.is_ascii_digit());

        self.records
            .values()
            .filter_map(|record| {
                let mut criteria = Vec::new();

                if all_digits && record.phone_contains(&needle) {
                    criteria.push(MatchKind::Phone);
                }
                if let Some(bd) = record.birthday() {
                    if bd.to_string().contains(&needle) {
                        criteria.push(MatchKind::Birthday);
                    }
                }
                if record.name().as_str().to_lowercase().contains(&needle) {
                    criteria.push(MatchKind::Name);
                }
                if let Some(email) = record.email() {
                    if email.as_str().contains(&needle) {
                        criteria.push(MatchKind::Email);
                    }
                }
                if let Some(address) = record.address() {
                    if address.as_str().to_lowercase().contains(&needle) {
                        criteria.push(MatchKind::Address);
                    }
                }

                (!criteria.is_empty()).then_some(SearchHit { record, criteria })
            })
            .collect()
    }

    /// Records whose next birthday falls within the coming `days` days
    /// (zero means "today only").
    pub fn upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record
                    .days_to_birthday(today)
                    .is_some_and(|(until, _)| until <= days)
            })
            .collect()
    }
}

/// Iterator over pages of an [`AddressBook`] or note book listing.
pub struct Pages<'a, T = Record> {
    items: Vec<&'a T>,
    page_size: usize,
    cursor: usize,
}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(items: Vec<&'a T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            cursor: 0,
        }
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.items.len() {
            return None;
        }
        let end = (self.cursor + self.page_size).min(self.items.len());
        let page = self.items[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, BirthDay, Email, Phone};

    fn name(raw: &str) -> Name {
        Name::new(raw).unwrap()
    }

    fn record_with_phone(raw_name: &str, raw_phone: &str) -> Record {
        let mut rec = Record::new(name(raw_name));
        rec.add_phone(Phone::new(raw_phone).unwrap());
        rec
    }

    #[test]
    fn find_is_case_insensitive_through_name_normalization() {
        let mut book = AddressBook::new();
        book.add(record_with_phone("john", "0671234567"));

        let found = book.find(&name("JOHN")).unwrap();
        assert_eq!(found.name().as_str(), "John");
    }

    #[test]
    fn add_overwrites_by_name_key() {
        let mut book = AddressBook::new();
        book.add(record_with_phone("john", "0671111111"));
        let replaced = book.add(record_with_phone("John", "0672222222"));

        assert!(replaced.is_some());
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find(&name("john")).unwrap().phones()[0].as_str(),
            "+380672222222"
        );
    }

    #[test]
    fn remove_reports_not_found_as_outcome() {
        let mut book = AddressBook::new();
        book.add(record_with_phone("john", "0671111111"));

        assert_eq!(book.remove(&name("jane")), RemoveOutcome::NotFound);
        assert_eq!(book.remove(&name("john")), RemoveOutcome::Removed);
        assert!(book.is_empty());
    }

    #[test]
    fn rename_migrates_phones_and_birthday() {
        let mut book = AddressBook::new();
        let mut rec = record_with_phone("john", "0671234567");
        rec.set_birthday(BirthDay::new("1990-09-15").unwrap());
        rec.set_address(Address::new("green street 5").unwrap());
        book.add(rec);

        assert_eq!(book.rename(&name("john"), name("johnny")), RenameOutcome::Renamed);
        assert!(book.find(&name("john")).is_none());

        let renamed = book.find(&name("johnny")).unwrap();
        assert_eq!(renamed.name().as_str(), "Johnny");
        assert_eq!(renamed.phones()[0].as_str(), "+380671234567");
        assert_eq!(renamed.birthday().unwrap().to_string(), "15-09-1990");
        // Address does not survive a rename.
        assert!(renamed.address().is_none());
    }

    #[test]
    fn rename_missing_entry_is_an_outcome() {
        let mut book = AddressBook::new();
        assert_eq!(book.rename(&name("ghost"), name("spirit")), RenameOutcome::NotFound);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut book = AddressBook::new();
        for n in ["zoe", "adam", "mary"] {
            book.add(Record::new(name(n)));
        }
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Adam", "Mary", "Zoe"]);
    }

    #[test]
    fn pages_cover_all_records_once() {
        let mut book = AddressBook::new();
        for i in 0..7 {
            book.add(Record::new(name(&format!("person{}", i))));
        }

        let pages: Vec<_> = book.pages(3).collect();
        assert_eq!(pages.len(), 3); // ceil(7 / 3)
        assert_eq!(pages[0].len(), 3);
        assert_eq!(pages[1].len(), 3);
        assert_eq!(pages[2].len(), 1);

        let mut seen: Vec<&str> = pages
            .iter()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        let total = seen.len();
        seen.dedup();
        assert_eq!(total, 7);
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn pages_are_restartable() {
        let mut book = AddressBook::new();
        book.add(Record::new(name("john")));

        assert_eq!(book.pages(1).count(), 1);
        assert_eq!(book.pages(1).count(), 1);
    }

    #[test]
    fn pages_clamp_zero_page_size() {
        let mut book = AddressBook::new();
        book.add(Record::new(name("john")));
        assert_eq!(book.pages(0).count(), 1);
    }

    #[test]
    fn search_annotates_every_matching_criterion() {
        let mut book = AddressBook::new();
        let mut rec = record_with_phone("john", "0671234567");
        rec.set_birthday(BirthDay::new("15-09-1990").unwrap());
        rec.add_email(Email::new("john.smith@example.com").unwrap());
        rec.set_address(Address::new("john's landing 7").unwrap());
        book.add(rec);

        // Name, email and address all contain "john".
        let hits = book.search("JOHN");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].criteria,
            vec![MatchKind::Name, MatchKind::Email, MatchKind::Address]
        );

        // All-digit term reaches phones and the rendered birthday.
        let hits = book.search("1990");
        assert_eq!(hits[0].criteria, vec![MatchKind::Birthday]);

        let hits = book.search("123456");
        assert_eq!(hits[0].criteria, vec![MatchKind::Phone]);

        // Birthday date string also matches with separators.
        let hits = book.search("15-09");
        assert_eq!(hits[0].criteria, vec![MatchKind::Birthday]);
    }

    #[test]
    fn search_skips_phone_criterion_for_non_digit_terms() {
        let mut book = AddressBook::new();
        book.add(record_with_phone("john", "0671234567"));
        assert!(book.search("+38067").is_empty());
        assert!(book.search("nobody").is_empty());
    }

    #[test]
    fn upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();

        let mut soon = Record::new(name("soon"));
        soon.set_birthday(BirthDay::new("1990-09-15").unwrap()); // 7 days away
        book.add(soon);

        let mut later = Record::new(name("later"));
        later.set_birthday(BirthDay::new("1990-12-01").unwrap());
        book.add(later);

        book.add(Record::new(name("nobody")));

        let hits = book.upcoming_birthdays(7, today);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name().as_str(), "Soon");

        assert!(book.upcoming_birthdays(0, today).is_empty());
        assert_eq!(book.upcoming_birthdays(120, today).len(), 2);
    }
}
