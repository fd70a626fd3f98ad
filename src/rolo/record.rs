//! A single contact record.
//!
//! A [`Record`] owns one immutable [`Name`] (its identity inside the book),
//! an ordered list of phones with no canonical duplicates, and optional
//! birthday, address and email. All mutation goes through the operations
//! here; expected conditions such as "phone already present" or "phone not
//! found" are ordinary outcome values, never errors. Only malformed raw
//! input fails, and that happens earlier, in the field constructors.

use crate::fields::{Address, BirthDay, Email, Name, Phone};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Width of the name column in rendered contact lines.
pub const NAME_FIELD_WIDTH: usize = 15;

/// Days ahead within which a birthday counts as "soon".
pub const BIRTHDAY_SOON_DAYS: i64 = 7;

/// Outcome of [`Record::add_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAdd {
    Added,
    Duplicate,
}

/// Outcome of [`Record::edit_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    Changed,
    /// Old and new numbers are canonically equal; nothing to do.
    SamePhone,
    NotFound,
}

/// Outcome of [`Record::remove_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRemove {
    Removed,
    NotFound,
}

/// Outcome of [`Record::add_email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailAdd {
    Set,
    AlreadySet,
}

/// How close a contact's next birthday is, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayProximity {
    Today,
    Soon,
    Later,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<BirthDay>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    email: Option<Email>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            address: None,
            email: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthDay> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Sets or replaces the birthday.
    pub fn set_birthday(&mut self, birthday: BirthDay) {
        self.birthday = Some(birthday);
    }

    /// Sets or replaces the address.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Sets the email if none is present; reports [`EmailAdd::AlreadySet`]
    /// otherwise without touching the current value.
    pub fn add_email(&mut self, email: Email) -> EmailAdd {
        if self.email.is_some() {
            return EmailAdd::AlreadySet;
        }
        self.email = Some(email);
        EmailAdd::Set
    }

    /// Replaces the email unconditionally.
    pub fn replace_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// Appends a phone unless a canonically equal one is already present.
    pub fn add_phone(&mut self, phone: Phone) -> PhoneAdd {
        if self.phones.contains(&phone) {
            return PhoneAdd::Duplicate;
        }
        self.phones.push(phone);
        PhoneAdd::Added
    }

    /// Replaces `old` with `new` in place, preserving list position.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> PhoneEdit {
        if *old == new {
            return PhoneEdit::SamePhone;
        }
        match self.phones.iter().position(|p| p == old) {
            Some(idx) => {
                self.phones[idx] = new;
                PhoneEdit::Changed
            }
            None => PhoneEdit::NotFound,
        }
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> PhoneRemove {
        match self.phones.iter().position(|p| p == phone) {
            Some(idx) => {
                self.phones.remove(idx);
                PhoneRemove::Removed
            }
            None => PhoneRemove::NotFound,
        }
    }

    pub fn remove_address(&mut self) {
        self.address = None;
    }

    pub fn remove_email(&mut self) {
        self.email = None;
    }

    /// Whether a canonically equal phone is present. Does not mutate.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Whether `needle` occurs textually in any of the phone numbers.
    pub fn phone_contains(&self, needle: &str) -> bool {
        self.phones.iter().any(|p| p.contains_digits(needle))
    }

    /// Days until the next birthday and the age turned then, if a birthday
    /// is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<(i64, i32)> {
        self.birthday.map(|bd| bd.until_next(today))
    }

    pub fn birthday_proximity(&self, today: NaiveDate) -> Option<BirthdayProximity> {
        self.days_to_birthday(today).map(|(days, _)| {
            if days == 0 {
                BirthdayProximity::Today
            } else if days <= BIRTHDAY_SOON_DAYS {
                BirthdayProximity::Soon
            } else {
                BirthdayProximity::Later
            }
        })
    }

    /// Renders the record relative to `today`: padded name column, phones
    /// comma-joined, birthday with its proximity note, address suffix.
    pub fn describe(&self, today: NaiveDate) -> String {
        let name_str = self.name.to_string();
        let blanks = " ".repeat(NAME_FIELD_WIDTH.saturating_sub(name_str.width()));
        let phones = self
            .phones
            .iter()
            .map(Phone::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!("{}{} : {}", name_str, blanks, phones);

        if let Some(bd) = &self.birthday {
            let (days, age) = bd.until_next(today);
            let note = if days == 0 {
                format!("(today is {}th birthday)", age)
            } else {
                format!("({} days until the {}th birthday)", days, age)
            };
            line.push_str(&format!(" birthday: {} {}", bd, note));
        }

        if let Some(address) = &self.address {
            line.push_str(&format!(" {}", address));
        }

        line
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn phone(raw: &str) -> Phone {
        Phone::new(raw).unwrap()
    }

    #[test]
    fn add_phone_then_duplicate() {
        let mut rec = record("john");
        assert_eq!(rec.add_phone(phone("067-123-45-67")), PhoneAdd::Added);
        assert_eq!(rec.phones()[0].as_str(), "+380671234567");

        // Same number in a different spelling is still a duplicate.
        assert_eq!(rec.add_phone(phone("+380671234567")), PhoneAdd::Duplicate);
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn edit_phone_preserves_position() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        rec.add_phone(phone("0672222222"));
        rec.add_phone(phone("0673333333"));

        let outcome = rec.edit_phone(&phone("0672222222"), phone("0679999999"));
        assert_eq!(outcome, PhoneEdit::Changed);
        assert_eq!(rec.phones()[1].as_str(), "+380679999999");
        assert_eq!(rec.phones().len(), 3);
    }

    #[test]
    fn edit_phone_same_number_is_a_noop() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        let outcome = rec.edit_phone(&phone("0671111111"), phone("+380671111111"));
        assert_eq!(outcome, PhoneEdit::SamePhone);
    }

    #[test]
    fn edit_phone_absent_leaves_list_unchanged() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        let before = rec.phones().to_vec();

        let outcome = rec.edit_phone(&phone("0675555555"), phone("0679999999"));
        assert_eq!(outcome, PhoneEdit::NotFound);
        assert_eq!(rec.phones(), before.as_slice());
    }

    #[test]
    fn remove_phone_outcomes() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        assert_eq!(rec.remove_phone(&phone("0679999999")), PhoneRemove::NotFound);
        assert_eq!(rec.remove_phone(&phone("0671111111")), PhoneRemove::Removed);
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn has_phone_compares_canonically() {
        let mut rec = record("john");
        rec.add_phone(phone("067-123-45-67"));
        assert!(rec.has_phone(&phone("+38 (067) 123 45 67")));
        assert!(!rec.has_phone(&phone("0679999999")));
    }

    #[test]
    fn phone_contains_scans_all_numbers() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        rec.add_phone(phone("0672222222"));
        assert!(rec.phone_contains("2222"));
        assert!(rec.phone_contains("1111"));
        assert!(!rec.phone_contains("3333"));
    }

    #[test]
    fn add_email_only_when_absent() -> Result<()> {
        let mut rec = record("john");
        assert_eq!(rec.add_email(Email::new("john@example.com")?), EmailAdd::Set);
        assert_eq!(
            rec.add_email(Email::new("other@example.com")?),
            EmailAdd::AlreadySet
        );
        assert_eq!(rec.email().unwrap().as_str(), "john@example.com");

        rec.replace_email(Email::new("other@example.com")?);
        assert_eq!(rec.email().unwrap().as_str(), "other@example.com");
        Ok(())
    }

    #[test]
    fn address_and_email_clear_unconditionally() -> Result<()> {
        let mut rec = record("john");
        rec.set_address(Address::new("green street 5")?);
        rec.add_email(Email::new("john@example.com")?);
        rec.remove_address();
        rec.remove_email();
        assert!(rec.address().is_none());
        assert!(rec.email().is_none());
        // Clearing an already empty field is fine.
        rec.remove_address();
        rec.remove_email();
        Ok(())
    }

    #[test]
    fn proximity_buckets() {
        let mut rec = record("john");
        rec.set_birthday(BirthDay::new("1990-09-15").unwrap());

        let on_the_day = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        let week_before = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let month_before = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();

        assert_eq!(
            rec.birthday_proximity(on_the_day),
            Some(BirthdayProximity::Today)
        );
        assert_eq!(
            rec.birthday_proximity(week_before),
            Some(BirthdayProximity::Soon)
        );
        assert_eq!(
            rec.birthday_proximity(month_before),
            Some(BirthdayProximity::Later)
        );
        assert_eq!(record("jane").birthday_proximity(on_the_day), None);
    }

    #[test]
    fn describe_pads_name_and_joins_phones() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        rec.add_phone(phone("0672222222"));

        let today = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let line = rec.describe(today);
        assert!(line.starts_with("John           : "));
        assert!(line.contains("+380671111111, +380672222222"));
    }

    #[test]
    fn describe_includes_birthday_and_address() {
        let mut rec = record("john");
        rec.add_phone(phone("0671111111"));
        rec.set_birthday(BirthDay::new("1990-09-15").unwrap());
        rec.set_address(Address::new("green street 5").unwrap());

        let today = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let line = rec.describe(today);
        assert!(line.contains("birthday: 15-09-1990 (7 days until the 34th birthday)"));
        assert!(line.ends_with("Address: Green Street 5"));

        let on_the_day = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        assert!(rec.describe(on_the_day).contains("(today is 34th birthday)"));
    }
}
