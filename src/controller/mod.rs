//! Booking form controller.
//!
//! One [`FormController`] owns the state of an open form, talks to the UI
//! only through [`FormView`], and delivers requests through an
//! [`EmailTransport`]. Event sources call the handler methods directly or
//! hand a [`FormEvent`] to [`FormController::handle`].

mod submission;

pub use submission::{
    SubmissionOutcome, SubmissionSettings, SubmissionState, FALLBACK_ERROR_MESSAGE,
    NOT_CONFIGURED_NOTICE, SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE,
};

use crate::error::TransportError;
use crate::events::FormEvent;
use crate::form::{Field, FileCheckResult, FormState};
use crate::metrics::Metrics;
use crate::models::{BookingRequest, FileEntry, TemplateParams};
use crate::transport::EmailTransport;
use crate::view::{FeedbackKind, FormView};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validation and submission controller for the booking modal.
pub struct FormController {
    state: FormState,
    view: Arc<dyn FormView>,
    transport: Option<Arc<dyn EmailTransport>>,
    settings: SubmissionSettings,
    metrics: Metrics,
    submission: SubmissionState,
    transitions: Vec<SubmissionState>,
}

impl FormController {
    /// Create a controller. A `None` transport means submissions show a
    /// configuration notice instead of sending.
    pub fn new(
        view: Arc<dyn FormView>,
        transport: Option<Arc<dyn EmailTransport>>,
        settings: SubmissionSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            state: FormState::new(),
            view,
            transport,
            settings,
            metrics,
            submission: SubmissionState::Idle,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    /// States entered during the most recent submit action, in order.
    pub fn last_transitions(&self) -> &[SubmissionState] {
        &self.transitions
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Dispatch one event to its handler.
    pub async fn handle(&mut self, event: FormEvent) -> Option<SubmissionOutcome> {
        match event {
            FormEvent::Open => self.open(),
            FormEvent::Close => self.close(),
            FormEvent::Input { field, value } => self.on_input(field, value),
            FormEvent::Blur { field, value } => self.on_blur(field, value),
            FormEvent::Files { files } => {
                self.on_files_changed(files);
            }
            FormEvent::Submit => return Some(self.submit().await),
        }
        None
    }

    /// Show the modal and run the initial validity check.
    pub fn open(&mut self) {
        info!("Booking form opened");
        self.view.set_modal_open(true);
        self.check_validity();
    }

    /// Hide the modal and reset the form.
    pub fn close(&mut self) {
        info!("Booking form closed");
        self.view.set_modal_open(false);
        self.reset();
    }

    /// Clear values, error displays, file list and feedback.
    pub fn reset(&mut self) {
        self.state.reset();
        self.view.clear_inputs();
        for field in Field::ALL {
            self.view.show_field_error(field, false);
        }
        self.view.show_file_error(None);
        self.view.set_file_list(&[]);
        self.view.clear_feedback();
        self.view.set_submit_enabled(false);
    }

    /// A field value changed. Only the aggregate signal is refreshed; error
    /// indicators wait for blur.
    pub fn on_input(&mut self, field: Field, value: impl Into<String>) {
        self.state.set_value(field, value);
        self.check_validity();
    }

    /// Focus left a field: show or hide that field's own error.
    pub fn on_blur(&mut self, field: Field, value: Option<String>) {
        if let Some(value) = value {
            self.state.set_value(field, value);
        }
        let valid = self.state.is_field_valid(field);
        debug!(field = %field, valid, "Field blurred");
        self.view.show_field_error(field, !valid);
        self.check_validity();
    }

    /// The file input's selection changed.
    ///
    /// A rejected selection is cleared from the input as a whole.
    pub fn on_files_changed(&mut self, files: Vec<FileEntry>) -> FileCheckResult {
        self.view.show_file_error(None);
        self.view.set_file_list(&[]);

        let result = self.state.select_files(files);
        if result.ok {
            self.view.set_file_list(&result.display_items);
        } else {
            warn!(
                reason = result.message.as_deref().unwrap_or_default(),
                "File selection rejected"
            );
            self.view.show_file_error(result.message.as_deref());
            self.view.clear_file_input();
        }

        self.check_validity();
        result
    }

    /// Recompute aggregate validity and mirror it on the submit control.
    pub fn check_validity(&self) -> bool {
        let valid = self.state.is_valid();
        self.view.set_submit_enabled(valid);
        valid
    }

    /// Run one submit action to completion.
    ///
    /// Errors are rendered through the view and reported in the outcome;
    /// nothing is retried.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        self.transitions.clear();
        self.enter(SubmissionState::Validating);

        if !self.check_validity() {
            debug!("Submit ignored, form is invalid");
            self.metrics.record_submission_blocked();
            self.enter(SubmissionState::Idle);
            return SubmissionOutcome::ValidationBlocked;
        }

        let Some(transport) = self.transport.clone() else {
            warn!("Submit attempted without a configured email transport");
            self.view.show_notice(NOT_CONFIGURED_NOTICE);
            self.metrics.record_submission_blocked();
            self.enter(SubmissionState::Idle);
            return SubmissionOutcome::TransportUnavailable;
        };

        let booking = match BookingRequest::try_from(self.state.values()) {
            Ok(booking) => booking,
            Err(e) => {
                warn!("Booking rejected after validity check: {}", e);
                self.metrics.record_submission_blocked();
                self.enter(SubmissionState::Idle);
                return SubmissionOutcome::ValidationBlocked;
            }
        };

        self.enter(SubmissionState::Sending);
        self.view.set_submit_enabled(false);
        self.view.set_submit_label(SENDING_LABEL);
        self.view.clear_feedback();

        let params =
            TemplateParams::from_booking(&booking, &self.settings.message, &self.settings.to_email);
        let result = transport
            .send(&self.settings.service_id, &self.settings.template_id, &params)
            .await;

        let attached = self.state.files();
        if !attached.is_empty() {
            info!(
                files = attached.len(),
                bytes = attached.total_bytes(),
                "File attachments are not forwarded by the email transport"
            );
        }

        let outcome = match result {
            Ok(response) if response.status == 200 => self.succeed(),
            Ok(response) => self.fail(TransportError::UnexpectedStatus(response.status)),
            Err(e) => self.fail(e),
        };

        self.view.set_submit_label(SUBMIT_LABEL);
        self.enter(SubmissionState::Idle);
        self.check_validity();
        outcome
    }

    fn succeed(&mut self) -> SubmissionOutcome {
        self.enter(SubmissionState::Succeeded);
        info!("Booking request sent");
        self.metrics.record_submission_succeeded();
        self.view.set_feedback(SUCCESS_MESSAGE, FeedbackKind::Success);
        self.view.schedule_close(self.settings.auto_close_delay);
        SubmissionOutcome::Success
    }

    fn fail(&mut self, error: TransportError) -> SubmissionOutcome {
        self.enter(SubmissionState::Failed);
        warn!("Booking request failed: {}", error);
        self.metrics.record_submission_failed();
        let message = error
            .user_message()
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        self.view.set_feedback(&message, FeedbackKind::Error);
        SubmissionOutcome::TransportError(message)
    }

    fn enter(&mut self, next: SubmissionState) {
        debug!(from = %self.submission, to = %next, "Submission state change");
        self.submission = next;
        self.transitions.push(next);
    }
}
