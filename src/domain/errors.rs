//! Field validation errors.

use std::fmt;

/// The four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Lowercase identifier, matching the JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-correctable failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name is empty after trimming.
    MissingName,

    /// Email is empty after trimming.
    MissingEmail,

    /// Email is present but not shaped like `local@domain.tld`.
    InvalidEmailFormat,

    /// Message is empty after trimming.
    MissingMessage,

    /// Message is present but shorter than the minimum length.
    MessageTooShort,

    /// Phone contains characters other than digits, spaces, `-`, `(`, `)` and `+`.
    InvalidPhoneFormat,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingName => Field::Name,
            Self::MissingEmail | Self::InvalidEmailFormat => Field::Email,
            Self::MissingMessage | Self::MessageTooShort => Field::Message,
            Self::InvalidPhoneFormat => Field::Phone,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required"),
            Self::MissingEmail => write!(f, "Email is required"),
            Self::InvalidEmailFormat => write!(f, "Invalid email address"),
            Self::MissingMessage => write!(f, "Message is required"),
            Self::MessageTooShort => write!(
                f,
                "Message must be at least {} characters",
                super::validation::MIN_MESSAGE_LEN
            ),
            Self::InvalidPhoneFormat => write!(f, "Invalid phone format"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Every failure found by one validation pass, in form order.
///
/// At most one error is kept per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier error on the same field.
    pub fn push(&mut self, error: FieldError) {
        let field = error.field();
        self.errors.retain(|e| e.field() != field);
        self.errors.push(error);
        self.errors.sort_by_key(|e| e.field());
    }

    /// Error currently attached to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Drop the error attached to `field`.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn contains(&self, error: &FieldError) -> bool {
        self.errors.contains(error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field(), e))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
