//! Validated field types for contact records.
//!
//! Every field is constructed through a fallible constructor that either
//! yields a normalized, canonical value or a typed [`RoloError`]. Once
//! constructed a field is immutable; re-assignment means constructing a new
//! value, which re-runs the same validation. `Display` always renders the
//! canonical form, and serde round-trips go through the constructors so a
//! hand-edited store file cannot smuggle in an invalid value.

use crate::error::{Result, RoloError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters stripped from phone input before the digit check.
const PHONE_PUNCTUATION: &str = "+()-.";

/// Number of trailing digits kept in the canonical phone form.
const PHONE_SIGNIFICANT_DIGITS: usize = 9;

/// Country prefix every canonical phone number starts with.
const PHONE_PREFIX: &str = "+380";

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A contact's name. Title-cased, non-empty, and the unique key of a
/// [`crate::record::Record`] inside an address book.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = title_case(raw);
        if normalized.is_empty() {
            return Err(RoloError::EmptyName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = RoloError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A phone number in canonical `+380XXXXXXXXX` form.
///
/// Input may carry spaces and `+ ( ) - .` separators; after stripping those
/// the rest must be all digits and at least nine long. The canonical value is
/// the fixed prefix plus the last nine digits, so `067-123-45-67` and
/// `+38 (067) 123 45 67` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !PHONE_PUNCTUATION.contains(*c))
            .collect();

        if digits.len() < PHONE_SIGNIFICANT_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(RoloError::InvalidPhone(raw.trim().to_string()));
        }

        let tail = &digits[digits.len() - PHONE_SIGNIFICANT_DIGITS..];
        Ok(Self(format!("{}{}", PHONE_PREFIX, tail)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring check against the canonical value, used by free-text search.
    pub fn contains_digits(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = RoloError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday. Accepts `YYYY-MM-DD` or `DD-MM-YYYY` text (tried in that
/// order, each an independently valid format) and stores a calendar date.
/// Renders as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDay(NaiveDate);

impl BirthDay {
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim();
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(text, "%d-%m-%Y"))
            .map(Self)
            .map_err(|_| RoloError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days until the next occurrence of this birthday and the age turned on
    /// that day. If the month/day is today, returns `(0, age_turned_today)`.
    /// Feb 29 birthdays observe Mar 1 in non-leap years.
    pub fn until_next(&self, today: NaiveDate) -> (i64, i32) {
        let occurrence_in = |year: i32| {
            NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists"))
        };

        let mut next = occurrence_in(today.year());
        if next < today {
            next = occurrence_in(today.year() + 1);
        }

        let days = (next - today).num_days();
        let age = next.year() - self.0.year();
        (days, age)
    }
}

impl fmt::Display for BirthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}

/// A postal address. Title-cased, non-empty free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = title_case(raw);
        if normalized.is_empty() {
            return Err(RoloError::Api("Address cannot be empty".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address: {}", self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = RoloError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// An email address, stored lowercase.
///
/// Shape check only: one `@`, a non-empty local part of ASCII alphanumerics
/// plus `._%+-`, and a dotted domain whose labels are non-empty ASCII
/// alphanumerics plus `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim().to_lowercase();
        if Self::is_valid(&text) {
            Ok(Self(text))
        } else {
            Err(RoloError::InvalidEmail(raw.trim().to_string()))
        }
    }

    fn is_valid(text: &str) -> bool {
        let Some((local, domain)) = text.split_once('@') else {
            return false;
        };
        if local.is_empty()
            || domain.contains('@')
            || !local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = RoloError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
