//! EmailAddress value object.

use super::errors::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

// local@domain.tld with no whitespace and exactly one '@' per segment.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A type-safe wrapper for email addresses.
///
/// The check is intentionally loose: something before the `@`, something
/// after it, and a dot somewhere in the domain part.
///
/// # Example
///
/// ```
/// use contact_flow::domain::EmailAddress;
///
/// let email = EmailAddress::new("cliente@example.com").unwrap();
/// assert_eq!(email.as_str(), "cliente@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::MissingEmail` if the value is blank and
    /// `FieldError::InvalidEmailFormat` if it does not look like an address.
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(FieldError::MissingEmail);
        }

        if !Self::is_valid(&email) {
            return Err(FieldError::InvalidEmailFormat);
        }

        Ok(Self(email))
    }

    /// Check the raw value against the address pattern.
    ///
    /// Surrounding whitespace is not trimmed first, so `" a@b.com"` fails.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
