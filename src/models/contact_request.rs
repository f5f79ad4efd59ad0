//! ContactRequest model: the body posted to the contact endpoint.

use crate::domain::{self, Field, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A quote/contact request as typed into the form.
///
/// Fields hold raw user input. Nothing here is validated until
/// [`ContactRequest::validate`] runs on a submit attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRequest {
    /// Full name of the person asking for a quote
    pub name: String,

    /// Reply-to email address
    pub email: String,

    /// Optional phone/WhatsApp number; empty when not provided
    pub phone: String,

    /// Free-text description of the project
    pub message: String,
}

impl ContactRequest {
    /// Run every field rule over this request.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        domain::validate(self)
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Mutable access to a field's value.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    /// True when every field is empty, as on a freshly mounted form.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
