//! Data models for the booking form.
//!
//! This module contains the attachment selection types and the payload sent
//! to the email transport.

pub mod booking;
pub mod file_selection;

pub use booking::{BookingRequest, TemplateParams};
pub use file_selection::{FileEntry, FileSelection};
