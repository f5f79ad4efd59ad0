//! Field-level rules for the contact form.
//!
//! Value objects validate at construction time, and [`validate`] runs every
//! rule over a [`ContactRequest`](crate::models::ContactRequest) at once so
//! the form can flag all invalid fields together.

pub mod email;
pub mod errors;
pub mod phone;
pub mod validation;

pub use email::EmailAddress;
pub use errors::{Field, FieldError, ValidationErrors};
pub use phone::{format_phone, PhoneNumber};
pub use validation::{validate, MIN_MESSAGE_LEN};
