//! Data models exchanged with the contact backend.

pub mod contact_request;

pub use contact_request::ContactRequest;
