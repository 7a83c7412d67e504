//! Domain value objects and field validation rules.
//!
//! This module contains the pure field predicates used by the form, and
//! type-safe wrappers for names, email addresses, and phone numbers. The
//! value objects validate at construction time so an accepted booking can
//! never carry a malformed field.

pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;
pub mod rules;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
pub use rules::{is_non_empty, is_valid_email, is_valid_phone, EMAIL_PATTERN, PHONE_PATTERN};
