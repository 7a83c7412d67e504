//! Booking request and the transport payload built from it.

use crate::domain::{EmailAddress, PersonName, PhoneNumber, ValidationError};
use crate::form::FieldValues;
use serde::{Deserialize, Serialize};

/// A booking whose four fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl TryFrom<&FieldValues> for BookingRequest {
    type Error = ValidationError;

    fn try_from(values: &FieldValues) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: PersonName::new(values.first_name.as_str())?,
            last_name: PersonName::new(values.last_name.as_str())?,
            email: EmailAddress::new(values.email.as_str())?,
            phone: PhoneNumber::new(values.phone.as_str())?,
        })
    }
}

/// Template parameters sent to the email transport.
///
/// Keys match the template variables of the booking email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    /// Build the payload for a booking. Names are sent as entered.
    pub fn from_booking(booking: &BookingRequest, message: &str, to_email: &str) -> Self {
        let first_name = booking.first_name.as_str();
        let last_name = booking.last_name.as_str();
        Self {
            from_name: format!("{} {}", first_name, last_name),
            from_email: booking.email.as_str().to_string(),
            phone_number: booking.phone.as_str().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            message: message.to_string(),
            to_email: to_email.to_string(),
        }
    }
}
