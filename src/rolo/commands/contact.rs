use crate::book::{AddressBook, RemoveOutcome, RenameOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{Address, BirthDay, Email, Name, Phone};
use crate::record::{EmailAdd, PhoneAdd, PhoneEdit, PhoneRemove, Record};

fn not_found(name: &Name) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "contact {} not found in address book",
        name
    )));
    result
}

/// Adds a new contact, optionally with phones and a birthday in one go.
/// An existing contact is reported, not overwritten.
pub fn add(
    book: &mut AddressBook,
    raw_name: &str,
    raw_phones: &[String],
    raw_birthday: Option<&str>,
) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;

    if let Some(existing) = book.find(&name) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "contact {} already exists; use 'add_phone' or 'change_phone' to update it",
            name
        )));
        result.records = vec![existing.clone()];
        return Ok(result);
    }

    let mut record = Record::new(name.clone());
    let mut result = CmdResult::default();

    for raw in raw_phones {
        let phone = Phone::new(raw)?;
        match record.add_phone(phone.clone()) {
            PhoneAdd::Added => result.add_message(CmdMessage::success(format!(
                "phone number {} has been added to {}'s contact list",
                phone, name
            ))),
            PhoneAdd::Duplicate => result.add_message(CmdMessage::warning(format!(
                "number {} is already present in {}'s contact list",
                phone, name
            ))),
        }
    }

    if let Some(raw) = raw_birthday {
        let birthday = BirthDay::new(raw)?;
        record.set_birthday(birthday);
    }

    result.messages.insert(
        0,
        CmdMessage::success(format!("contact {} has been successfully added", name)),
    );
    result.records = vec![record.clone()];
    book.add(record);
    Ok(result)
}

/// Appends one or more phones to an existing contact.
pub fn add_phones(
    book: &mut AddressBook,
    raw_name: &str,
    raw_phones: &[String],
) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };

    let mut result = CmdResult::default();
    for raw in raw_phones {
        let phone = Phone::new(raw)?;
        match record.add_phone(phone.clone()) {
            PhoneAdd::Added => result.add_message(CmdMessage::success(format!(
                "phone number {} has been added to {}'s contact list",
                phone, name
            ))),
            PhoneAdd::Duplicate => result.add_message(CmdMessage::warning(format!(
                "number {} is already present in {}'s contact list",
                phone, name
            ))),
        }
    }
    result.records = vec![record.clone()];
    Ok(result)
}

/// Sets or replaces the birthday of an existing contact.
pub fn set_birthday(book: &mut AddressBook, raw_name: &str, raw: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let birthday = BirthDay::new(raw)?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };
    record.set_birthday(birthday);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "the date of birth for contact {} is set to {}",
        name, birthday
    )));
    result.records = vec![record.clone()];
    Ok(result)
}

/// Sets or replaces the address. Multi-word addresses arrive as separate
/// arguments and are joined back with spaces.
pub fn set_address(book: &mut AddressBook, raw_name: &str, words: &[String]) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let address = Address::new(&words.join(" "))?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };
    record.set_address(address.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "the address for contact {} is set to {}",
        name,
        address.as_str()
    )));
    result.records = vec![record.clone()];
    Ok(result)
}

/// Sets the email if the contact has none yet.
pub fn add_email(book: &mut AddressBook, raw_name: &str, raw: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let email = Email::new(raw)?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };

    let mut result = CmdResult::default();
    match record.add_email(email.clone()) {
        EmailAdd::Set => result.add_message(CmdMessage::success(format!(
            "the email for contact {} is set to {}",
            name, email
        ))),
        EmailAdd::AlreadySet => result.add_message(CmdMessage::warning(format!(
            "contact {} already has an email; use 'change_email' to replace it",
            name
        ))),
    }
    result.records = vec![record.clone()];
    Ok(result)
}

/// Replaces the email unconditionally.
pub fn change_email(book: &mut AddressBook, raw_name: &str, raw: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let email = Email::new(raw)?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };
    record.replace_email(email.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "the email for contact {} has been changed to {}",
        name, email
    )));
    result.records = vec![record.clone()];
    Ok(result)
}

/// Re-keys a contact under a new name, migrating phones and birthday.
pub fn change_name(book: &mut AddressBook, raw_old: &str, raw_new: &str) -> Result<CmdResult> {
    let old = Name::new(raw_old)?;
    let new = Name::new(raw_new)?;

    let mut result = CmdResult::default();
    match book.rename(&old, new.clone()) {
        RenameOutcome::Renamed => {
            result.add_message(CmdMessage::success(format!(
                "the name of the contact {} has been changed to {}",
                old, new
            )));
            if let Some(record) = book.find(&new) {
                result.records = vec![record.clone()];
            }
        }
        RenameOutcome::NotFound => return Ok(not_found(&old)),
    }
    Ok(result)
}

/// Replaces one phone with another, preserving its place in the list.
pub fn change_phone(
    book: &mut AddressBook,
    raw_name: &str,
    raw_old: &str,
    raw_new: &str,
) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let old = Phone::new(raw_old)?;
    let new = Phone::new(raw_new)?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };

    let mut result = CmdResult::default();
    match record.edit_phone(&old, new.clone()) {
        PhoneEdit::Changed => result.add_message(CmdMessage::success(format!(
            "phone number {} has been successfully changed to {} for contact {}",
            old, new, name
        ))),
        PhoneEdit::SamePhone => result.add_message(CmdMessage::warning(format!(
            "you are trying to replace the phone number {} with the same one",
            old
        ))),
        PhoneEdit::NotFound => result.add_message(CmdMessage::warning(format!(
            "phone number {} is not among the contact numbers of {}",
            old, name
        ))),
    }
    result.records = vec![record.clone()];
    Ok(result)
}

pub fn remove_phone(book: &mut AddressBook, raw_name: &str, raw: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let phone = Phone::new(raw)?;

    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };

    let mut result = CmdResult::default();
    match record.remove_phone(&phone) {
        PhoneRemove::Removed => result.add_message(CmdMessage::success(format!(
            "phone number {} has been removed from {}'s contact list",
            phone, name
        ))),
        PhoneRemove::NotFound => result.add_message(CmdMessage::warning(format!(
            "phone number {} is not among the contact numbers of {}",
            phone, name
        ))),
    }
    result.records = vec![record.clone()];
    Ok(result)
}

pub fn remove_address(book: &mut AddressBook, raw_name: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };
    record.remove_address();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "address of {} has been removed",
        name
    )));
    result.records = vec![record.clone()];
    Ok(result)
}

pub fn remove_email(book: &mut AddressBook, raw_name: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;
    let Some(record) = book.find_mut(&name) else {
        return Ok(not_found(&name));
    };
    record.remove_email();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "email of {} has been removed",
        name
    )));
    result.records = vec![record.clone()];
    Ok(result)
}

/// Deletes a contact. A missing contact is a reported outcome, not an error.
pub fn delete(book: &mut AddressBook, raw_name: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;

    let mut result = CmdResult::default();
    match book.remove(&name) {
        RemoveOutcome::Removed => result.add_message(CmdMessage::success(format!(
            "contact {} has been successfully deleted",
            name
        ))),
        RemoveOutcome::NotFound => result.add_message(CmdMessage::warning(format!(
            "contact {} not found",
            name
        ))),
    }
    Ok(result)
}

/// Looks a contact up by name, any case variant.
pub fn find(book: &AddressBook, raw_name: &str) -> Result<CmdResult> {
    let name = Name::new(raw_name)?;

    let mut result = CmdResult::default();
    match book.find(&name) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!("contact {} found", name)));
            result.records = vec![record.clone()];
        }
        None => result.add_message(CmdMessage::warning(format!("contact {} not found", name))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RoloError;

    fn assert_level(result: &CmdResult, level: MessageLevel) {
        assert!(
            result.messages.iter().any(|m| m.level == level),
            "no {:?} message in {:?}",
            level,
            result.messages
        );
    }

    #[test]
    fn add_then_find_with_different_case() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &[], None).unwrap();

        let result = find(&book, "JOHN").unwrap();
        assert_level(&result, MessageLevel::Success);
        assert_eq!(result.records[0].name().as_str(), "John");
    }

    #[test]
    fn add_with_phones_and_birthday() {
        let mut book = AddressBook::new();
        let result = add(
            &mut book,
            "john",
            &["067-123-45-67".into()],
            Some("15-09-1990"),
        )
        .unwrap();

        assert_level(&result, MessageLevel::Success);
        let record = &result.records[0];
        assert_eq!(record.phones()[0].as_str(), "+380671234567");
        assert_eq!(record.birthday().unwrap().to_string(), "15-09-1990");
    }

    #[test]
    fn add_existing_contact_reports_without_overwriting() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &["0671111111".into()], None).unwrap();

        let result = add(&mut book, "John", &[], None).unwrap();
        assert_level(&result, MessageLevel::Warning);
        // Original phones survived.
        let name = Name::new("john").unwrap();
        assert_eq!(book.find(&name).unwrap().phones().len(), 1);
    }

    #[test]
    fn add_invalid_phone_propagates_error() {
        let mut book = AddressBook::new();
        let err = add(&mut book, "john", &["12ab".into()], None).unwrap_err();
        assert!(matches!(err, RoloError::InvalidPhone(_)));
        // Nothing was inserted.
        assert!(book.is_empty());
    }

    #[test]
    fn add_phone_twice_reports_duplicate_once() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &[], None).unwrap();

        let result = add_phones(&mut book, "john", &["0671234567".into()]).unwrap();
        assert_level(&result, MessageLevel::Success);

        let result = add_phones(&mut book, "john", &["+380671234567".into()]).unwrap();
        assert_level(&result, MessageLevel::Warning);
        assert_eq!(result.records[0].phones().len(), 1);
    }

    #[test]
    fn change_phone_not_found_is_a_warning() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &["0671111111".into()], None).unwrap();

        let result = change_phone(&mut book, "john", "0675555555", "0679999999").unwrap();
        assert_level(&result, MessageLevel::Warning);
        assert_eq!(result.records[0].phones()[0].as_str(), "+380671111111");
    }

    #[test]
    fn change_name_migrates_data() {
        let mut book = AddressBook::new();
        add(
            &mut book,
            "john",
            &["0671234567".into()],
            Some("1990-09-15"),
        )
        .unwrap();

        let result = change_name(&mut book, "john", "johnny").unwrap();
        assert_level(&result, MessageLevel::Success);

        assert!(book.find(&Name::new("john").unwrap()).is_none());
        let renamed = book.find(&Name::new("johnny").unwrap()).unwrap();
        assert_eq!(renamed.phones()[0].as_str(), "+380671234567");
        assert!(renamed.birthday().is_some());
    }

    #[test]
    fn email_add_then_change() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &[], None).unwrap();

        let result = add_email(&mut book, "john", "john@example.com").unwrap();
        assert_level(&result, MessageLevel::Success);

        let result = add_email(&mut book, "john", "second@example.com").unwrap();
        assert_level(&result, MessageLevel::Warning);

        let result = change_email(&mut book, "john", "second@example.com").unwrap();
        assert_level(&result, MessageLevel::Success);
        assert_eq!(
            result.records[0].email().unwrap().as_str(),
            "second@example.com"
        );
    }

    #[test]
    fn address_set_and_remove() {
        let mut book = AddressBook::new();
        add(&mut book, "john", &[], None).unwrap();

        let result =
            set_address(&mut book, "john", &["green".into(), "street".into(), "5".into()])
                .unwrap();
        assert_level(&result, MessageLevel::Success);
        assert_eq!(
            result.records[0].address().unwrap().as_str(),
            "Green Street 5"
        );

        let result = remove_address(&mut book, "john").unwrap();
        assert!(result.records[0].address().is_none());
    }

    #[test]
    fn delete_missing_contact_is_an_outcome() {
        let mut book = AddressBook::new();
        let result = delete(&mut book, "ghost").unwrap();
        assert_level(&result, MessageLevel::Warning);
    }

    #[test]
    fn mutations_on_missing_contact_report_not_found() {
        let mut book = AddressBook::new();
        let result = set_birthday(&mut book, "ghost", "1990-01-01").unwrap();
        assert_level(&result, MessageLevel::Warning);
        let result = add_phones(&mut book, "ghost", &["0671234567".into()]).unwrap();
        assert_level(&result, MessageLevel::Warning);
    }
}
