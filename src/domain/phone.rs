//! PhoneNumber value object and the Brazilian mobile display mask.

use super::errors::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

// ASCII digits spelled out: `\d` in the regex crate matches any Unicode digit.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-()+]+$").expect("valid phone regex"));

/// Digits in a full mobile number: two-digit area code plus nine-digit subscriber.
const MASKED_DIGITS: usize = 11;

/// Apply the `(DD) DDDDD-DDDD` mask once exactly eleven digits are present.
///
/// Every non-digit is ignored when counting. Any other digit count returns
/// the input unchanged, so partial typing is never forced into the mask.
///
/// ```
/// use contact_flow::domain::format_phone;
///
/// assert_eq!(format_phone("81985596965"), "(81) 98559-6965");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != MASKED_DIGITS {
        return raw.to_string();
    }

    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}

/// A type-safe wrapper for an optional-field phone number.
///
/// Only the character set is checked. Length is not, so `"123"` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty (an absent phone is represented by the form, not here)
    /// - Can contain: digits, whitespace, hyphens, parentheses, plus sign
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidPhoneFormat` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, FieldError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(FieldError::InvalidPhoneFormat);
        }

        Ok(Self(phone))
    }

    /// Validate phone characters.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_masks_eleven_digits() {
        assert_eq!(format_phone("81985596965"), "(81) 98559-6965");
        assert_eq!(format_phone("81 9 8559-6965"), "(81) 98559-6965");
        assert_eq!(format_phone("(81) 98559-6965"), "(81) 98559-6965");
    }

    #[test]
    fn test_format_phone_leaves_partial_input() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("8198559"), "8198559");
        assert_eq!(format_phone("+5581985596965"), "+5581985596965");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("(81) 98559-6965").is_ok());
        assert!(PhoneNumber::new("+55 81 98559 6965").is_ok());
        assert!(PhoneNumber::new("123").is_ok());
        assert_eq!(PhoneNumber::new("81.98559"), Err(FieldError::InvalidPhoneFormat));
        assert_eq!(PhoneNumber::new("call me"), Err(FieldError::InvalidPhoneFormat));
        assert_eq!(PhoneNumber::new("٣٣٣"), Err(FieldError::InvalidPhoneFormat));
        assert_eq!(PhoneNumber::new(""), Err(FieldError::InvalidPhoneFormat));
    }


    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("(81) 98559-6965").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"(81) 98559-6965\"");
    }
}
