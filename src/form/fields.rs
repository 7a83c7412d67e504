//! The four required text fields.

use crate::domain::{is_non_empty, is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A required text field of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    /// All required fields in form order.
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

    /// Identifier used by the view and the event stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Test a raw input value against this field's rule.
    ///
    /// Email and phone values are trimmed before the pattern test.
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Field::FirstName | Field::LastName => is_non_empty(value),
            Field::Email => is_valid_email(value.trim()),
            Field::Phone => is_valid_phone(value.trim()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current raw values of the four text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        field.is_valid(self.get(field))
    }

    /// True iff every required field passes its rule.
    pub fn all_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.is_field_valid(*field))
    }
}
