//! View capability used by the form controller.
//!
//! The controller never touches a concrete UI. Every visible side effect goes
//! through [`FormView`], and each call corresponds to one [`ViewUpdate`] so
//! adapters can forward or record updates uniformly.

mod console;
pub use console::ConsoleView;

use crate::form::Field;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Styling of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// One visible change requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "update", rename_all = "camelCase")]
pub enum ViewUpdate {
    ModalOpen { open: bool },
    ClearInputs,
    FieldError { field: Field, show: bool },
    FileError { message: Option<String> },
    FileList { items: Vec<String> },
    ClearFileInput,
    SubmitEnabled { enabled: bool },
    SubmitLabel { label: String },
    Feedback { text: String, kind: FeedbackKind },
    ClearFeedback,
    Notice { text: String },
    ScheduleClose { delay_ms: u64 },
}

/// Side-effect channel from the form controller to the UI.
pub trait FormView: Send + Sync {
    /// Apply one update.
    fn apply(&self, update: ViewUpdate);

    fn set_modal_open(&self, open: bool) {
        self.apply(ViewUpdate::ModalOpen { open });
    }

    /// Empty every text and file input.
    fn clear_inputs(&self) {
        self.apply(ViewUpdate::ClearInputs);
    }

    fn show_field_error(&self, field: Field, show: bool) {
        self.apply(ViewUpdate::FieldError { field, show });
    }

    /// Show the file error region with a message, or hide it with `None`.
    fn show_file_error(&self, message: Option<&str>) {
        self.apply(ViewUpdate::FileError {
            message: message.map(str::to_string),
        });
    }

    fn set_file_list(&self, items: &[String]) {
        self.apply(ViewUpdate::FileList {
            items: items.to_vec(),
        });
    }

    fn clear_file_input(&self) {
        self.apply(ViewUpdate::ClearFileInput);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.apply(ViewUpdate::SubmitEnabled { enabled });
    }

    fn set_submit_label(&self, label: &str) {
        self.apply(ViewUpdate::SubmitLabel {
            label: label.to_string(),
        });
    }

    fn set_feedback(&self, text: &str, kind: FeedbackKind) {
        self.apply(ViewUpdate::Feedback {
            text: text.to_string(),
            kind,
        });
    }

    fn clear_feedback(&self) {
        self.apply(ViewUpdate::ClearFeedback);
    }

    /// Blocking notice, used when submission cannot run at all.
    fn show_notice(&self, text: &str) {
        self.apply(ViewUpdate::Notice {
            text: text.to_string(),
        });
    }

    /// Ask the UI to close the modal after `delay`.
    fn schedule_close(&self, delay: Duration) {
        self.apply(ViewUpdate::ScheduleClose {
            delay_ms: delay.as_millis() as u64,
        });
    }
}
