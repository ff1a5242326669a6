use crate::error::Result;
use crate::fields::{Birthday, Field, Name, Phone};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, an optional birthday and an ordered list of phones.
///
/// The name is the record's identity inside a [`ContactStore`](crate::store::ContactStore)
/// and cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::from_value(name.into()),
            birthday: None,
            phones: Vec::new(),
        }
    }

    /// Creates a record with a birthday, validating it first.
    pub fn with_birthday(name: impl Into<String>, birthday: &str) -> Result<Self> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.update(raw),
            None => {
                self.birthday = Some(Birthday::new(raw)?);
                Ok(())
            }
        }
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Removes the phone at `index`. An index past the end is ignored and yields `None`.
    pub fn remove_phone(&mut self, index: usize) -> Option<Phone> {
        if index < self.phones.len() {
            Some(self.phones.remove(index))
        } else {
            None
        }
    }

    /// Replaces the phone at `index`.
    ///
    /// The new number is validated before the index is looked at. Returns `Ok(false)`
    /// when the index is past the end and nothing changed.
    pub fn edit_phone(&mut self, index: usize, new_number: &str) -> Result<bool> {
        let number = Phone::parse(new_number)?;
        match self.phones.get_mut(index) {
            Some(phone) => {
                phone.set_value(number);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Days from `today` until the next occurrence of the birthday, `None` when unset.
    ///
    /// A birthday falling on today gives 0. Feb 29 birthdays are celebrated on
    /// Feb 28 in years without a leap day.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.date();

        let this_year = anniversary(birthday, today.year());
        let next = if this_year < today {
            anniversary(birthday, today.year() + 1)
        } else {
            this_year
        };

        Some((next - today).num_days())
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or(birthday)
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Name: {}", self.name)?;
        match &self.birthday {
            Some(birthday) => writeln!(f, "Birthday: {}", birthday)?,
            None => writeln!(f, "Birthday: not set")?,
        }
        write!(f, "Phones: {}", phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Alice");
        for p in phones {
            record.add_phone(p).unwrap();
        }
        record
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1111111", "2222222", "1111111"]);
        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111", "2222222", "1111111"]);
    }

    #[test]
    fn add_phone_rejects_invalid_numbers() {
        let mut record = Record::new("Alice");
        let err = record.add_phone("12ab").unwrap_err();
        assert!(matches!(err, PhonebookError::InvalidInput(_)));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_in_and_out_of_bounds() {
        let mut record = record_with_phones(&["1111111", "2222222"]);
        assert_eq!(record.remove_phone(5), None);
        assert_eq!(record.phones().len(), 2);

        let removed = record.remove_phone(0).unwrap();
        assert_eq!(removed.as_str(), "1111111");
        assert_eq!(record.first_phone().unwrap().as_str(), "2222222");
    }

    #[test]
    fn edit_phone_replaces_only_target() {
        let mut record = record_with_phones(&["1111111", "2222222"]);
        assert!(record.edit_phone(1, "3333333").unwrap());
        assert_eq!(record.phones()[0].as_str(), "1111111");
        assert_eq!(record.phones()[1].as_str(), "3333333");
    }

    #[test]
    fn edit_phone_out_of_bounds_is_noop() {
        let mut record = record_with_phones(&["1111111"]);
        assert!(!record.edit_phone(3, "3333333").unwrap());
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "1111111");
    }

    #[test]
    fn edit_phone_validates_even_when_out_of_bounds() {
        let mut record = Record::new("Alice");
        assert!(record.edit_phone(0, "nope").is_err());
    }

    #[test]
    fn days_to_birthday_unset() {
        let record = Record::new("Alice");
        assert_eq!(record.days_to_birthday(date(2024, 3, 1)), None);
    }

    #[test]
    fn days_to_birthday_today_is_zero() {
        let record = Record::with_birthday("Alice", "1990-06-15").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 6, 15)), Some(0));
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let record = Record::with_birthday("Alice", "1990-06-15").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 6, 1)), Some(14));
    }

    #[test]
    fn days_to_birthday_already_passed_wraps_to_next_year() {
        let record = Record::with_birthday("Alice", "1990-06-15").unwrap();
        // 2024-06-16 -> 2025-06-15
        assert_eq!(record.days_to_birthday(date(2024, 6, 16)), Some(364));
        assert_eq!(record.days_to_birthday(date(2023, 12, 31)), Some(167));
    }

    #[test]
    fn days_to_leap_day_birthday() {
        let record = Record::with_birthday("Alice", "2000-02-29").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 2, 28)), Some(1));
        assert_eq!(record.days_to_birthday(date(2023, 2, 1)), Some(27));
        // After Feb 28 in 2023 the next one is the real leap day in 2024
        assert_eq!(record.days_to_birthday(date(2023, 3, 1)), Some(365));
    }

    #[test]
    fn set_birthday_invalid_keeps_previous() {
        let mut record = Record::with_birthday("Alice", "1990-06-15").unwrap();
        assert!(record.set_birthday("1990-02-30").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "1990-06-15");
    }

    #[test]
    fn display_with_and_without_birthday() {
        let mut record = record_with_phones(&["1111111", "2222222"]);
        assert_eq!(
            record.to_string(),
            "Name: Alice\nBirthday: not set\nPhones: 1111111, 2222222"
        );

        record.set_birthday("1990-06-15").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: Alice\nBirthday: 1990-06-15\nPhones: 1111111, 2222222"
        );
    }

    #[test]
    fn serde_keeps_absent_birthday_and_empty_phones() {
        let record = Record::new("Bob");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.birthday().is_none());
        assert!(parsed.phones().is_empty());
    }
}
