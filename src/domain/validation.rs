//! The single validation pass run on every submit attempt.

use super::email::EmailAddress;
use super::errors::{FieldError, ValidationErrors};
use super::phone::PhoneNumber;
use crate::models::ContactRequest;

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Check every field of `request` and collect all failures.
///
/// Pure: no logging, no side effects. Each rule is evaluated independently,
/// so a request with a blank name and a short message reports both.
pub fn validate(request: &ContactRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if request.name.trim().is_empty() {
        errors.push(FieldError::MissingName);
    }

    if let Err(e) = EmailAddress::new(request.email.as_str()) {
        errors.push(e);
    }

    // An empty phone is simply absent; whitespace-only input is still checked.
    if !request.phone.is_empty() {
        if let Err(e) = PhoneNumber::new(request.phone.as_str()) {
            errors.push(e);
        }
    }

    let message = request.message.trim();
    if message.is_empty() {
        errors.push(FieldError::MissingMessage);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(FieldError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
