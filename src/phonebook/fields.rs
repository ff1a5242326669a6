//! # Contact Fields
//!
//! Every piece of data a [`Record`](crate::model::Record) holds is a field, and every
//! field kind knows how to validate its own raw input:
//!
//! | Kind         | Accepted input                                   |
//! |--------------|--------------------------------------------------|
//! | [`Name`]     | anything                                         |
//! | [`Phone`]    | 7 to 15 ASCII digits                             |
//! | [`Birthday`] | a real calendar date written as `YYYY-MM-DD`     |
//!
//! Values only enter a field through [`Field::parse`], so a field that exists is a
//! field that passed validation. This also holds for values read back from disk:
//! the serde implementations below go through the same parser.

use crate::error::{PhonebookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Shared behavior of all field kinds.
pub trait Field: Sized {
    type Value;

    /// Validates raw user input and converts it into the field's value.
    fn parse(raw: &str) -> Result<Self::Value>;

    fn from_value(value: Self::Value) -> Self;

    fn value(&self) -> &Self::Value;

    fn set_value(&mut self, value: Self::Value);

    fn new(raw: &str) -> Result<Self> {
        Self::parse(raw).map(Self::from_value)
    }

    /// Replaces the value if `raw` validates. On error the field is untouched.
    fn update(&mut self, raw: &str) -> Result<()> {
        let value = Self::parse(raw)?;
        self.set_value(value);
        Ok(())
    }
}

/// A contact's name. The generic field: any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Field for Name {
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }

    fn from_value(value: String) -> Self {
        Self(value)
    }

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, value: String) {
        self.0 = value;
    }
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number made only of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Field for Phone {
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhonebookError::InvalidInput(format!(
                "phone number must contain only digits, got '{}'",
                raw
            )));
        }
        if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&raw.len()) {
            return Err(PhonebookError::InvalidInput(format!(
                "phone number must have {} to {} digits, got {}",
                PHONE_MIN_DIGITS,
                PHONE_MAX_DIGITS,
                raw.len()
            )));
        }
        Ok(raw.to_string())
    }

    fn from_value(value: String) -> Self {
        Self(value)
    }

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, value: String) {
        self.0 = value;
    }
}

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A birth date. Only month and day matter for the countdown, the year is kept as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Field for Birthday {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate> {
        // chrono accepts unpadded or signed numbers, the stored format does not
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(PhonebookError::InvalidInput(format!(
                "birthday must be written as YYYY-MM-DD, got '{}'",
                raw
            )));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| {
            PhonebookError::InvalidInput(format!("'{}' is not a calendar date", raw))
        })
    }

    fn from_value(value: NaiveDate) -> Self {
        Self(value)
    }

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set_value(&mut self, value: NaiveDate) {
        self.0 = value;
    }
}

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_anything() {
        let mut name = Name::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");

        name.update("").unwrap();
        assert_eq!(name.as_str(), "");
        name.update("Zoë 42!").unwrap();
        assert_eq!(name.to_string(), "Zoë 42!");
    }

    #[test]
    fn phone_accepts_digit_strings_within_bounds() {
        for len in PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS {
            let raw = "9".repeat(len);
            assert!(Phone::new(&raw).is_ok(), "length {} should be accepted", len);
        }
        assert_eq!(Phone::new("0123456").unwrap().as_str(), "0123456");
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456").is_err());
        assert!(Phone::new("1234567890123456").is_err());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(Phone::new("123-4567").is_err());
        assert!(Phone::new("+12345678").is_err());
        assert!(Phone::new("12345 678").is_err());
        assert!(Phone::new("abcdefgh").is_err());
        // Non-ASCII digits (Arabic-Indic)
        assert!(Phone::new("١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn phone_update_keeps_old_value_on_error() {
        let mut phone = Phone::new("1234567").unwrap();
        let err = phone.update("12").unwrap_err();
        assert!(matches!(err, PhonebookError::InvalidInput(_)));
        assert_eq!(phone.as_str(), "1234567");

        phone.update("7654321").unwrap();
        assert_eq!(phone.as_str(), "7654321");
    }

    #[test]
    fn birthday_accepts_real_dates() {
        let bday = Birthday::new("1990-05-17").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
        assert_eq!(bday.to_string(), "1990-05-17");
        assert!(Birthday::new("2000-02-29").is_ok());
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(Birthday::new("2001-02-29").is_err());
        assert!(Birthday::new("1990-13-01").is_err());
        assert!(Birthday::new("1990-04-31").is_err());
        assert!(Birthday::new("1990-00-10").is_err());
    }

    #[test]
    fn birthday_rejects_other_shapes() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-5-17").is_err());
        assert!(Birthday::new("17-05-1990").is_err());
        assert!(Birthday::new("1990/05/17").is_err());
        assert!(Birthday::new("1990-05-17T00:00").is_err());
        assert!(Birthday::new("yesterday").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let phone: std::result::Result<Phone, _> = serde_json::from_str("\"12\"");
        assert!(phone.is_err());

        let bday: Birthday = serde_json::from_str("\"1985-12-01\"").unwrap();
        assert_eq!(serde_json::to_string(&bday).unwrap(), "\"1985-12-01\"");

        let bad: std::result::Result<Birthday, _> = serde_json::from_str("\"1985-12-41\"");
        assert!(bad.is_err());
    }
}
