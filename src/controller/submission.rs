//! Submission state machine types and user-facing texts.

use crate::config::Config;
use std::fmt;
use std::time::Duration;

/// Default label of the submit control.
pub const SUBMIT_LABEL: &str = "Submit Request";

/// Label shown while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Feedback shown when the transport accepted the request.
pub const SUCCESS_MESSAGE: &str = "Request sent successfully! We will contact you soon.";

/// Feedback shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to send request. Please try again.";

/// Notice shown when no email transport is available.
pub const NOT_CONFIGURED_NOTICE: &str =
    "Email service is not configured. Booking requests cannot be sent right now.";

/// Phase of the submit action.
///
/// Idle → Validating → Sending → Succeeded | Failed → Idle. A failed
/// validation goes straight back to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Sending => "sending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Transport accepted the request.
    Success,
    /// Transport failed; the message is what the user was shown.
    TransportError(String),
    /// Form was invalid, nothing was sent.
    ValidationBlocked,
    /// No transport is configured, a notice was shown.
    TransportUnavailable,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Opaque identifiers and fixed texts used to build each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSettings {
    pub service_id: String,
    pub template_id: String,
    pub to_email: String,
    pub message: String,
    pub auto_close_delay: Duration,
}

impl From<&Config> for SubmissionSettings {
    fn from(config: &Config) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            to_email: config.to_email.clone(),
            message: config.booking_message.clone(),
            auto_close_delay: config.auto_close_delay(),
        }
    }
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
