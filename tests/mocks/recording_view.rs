use booking_form::form::Field;
use booking_form::view::{FeedbackKind, FormView, ViewUpdate};
use std::sync::{Arc, Mutex};

/// View that records every update instead of rendering it.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingView {
    updates: Arc<Mutex<Vec<ViewUpdate>>>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.updates.lock().unwrap().clear();
    }

    /// Last state of the submit control, if it was ever set.
    pub fn submit_enabled(&self) -> Option<bool> {
        self.updates().iter().rev().find_map(|u| match u {
            ViewUpdate::SubmitEnabled { enabled } => Some(*enabled),
            _ => None,
        })
    }

    /// Whether the field's error is currently shown.
    pub fn field_error_shown(&self, field: Field) -> bool {
        self.updates()
            .iter()
            .rev()
            .find_map(|u| match u {
                ViewUpdate::FieldError { field: f, show } if *f == field => Some(*show),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn file_error(&self) -> Option<String> {
        self.updates().iter().rev().find_map(|u| match u {
            ViewUpdate::FileError { message } => Some(message.clone()),
            _ => None,
        })?
    }

    pub fn file_list(&self) -> Vec<String> {
        self.updates()
            .iter()
            .rev()
            .find_map(|u| match u {
                ViewUpdate::FileList { items } => Some(items.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Current feedback, `None` once cleared.
    pub fn feedback(&self) -> Option<(String, FeedbackKind)> {
        self.updates().iter().rev().find_map(|u| match u {
            ViewUpdate::Feedback { text, kind } => Some(Some((text.clone(), *kind))),
            ViewUpdate::ClearFeedback => Some(None),
            _ => None,
        })?
    }

    pub fn submit_label(&self) -> Option<String> {
        self.updates().iter().rev().find_map(|u| match u {
            ViewUpdate::SubmitLabel { label } => Some(label.clone()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&ViewUpdate) -> bool) -> usize {
        self.updates().iter().filter(|u| pred(*u)).count()
    }
}

impl FormView for RecordingView {
    fn apply(&self, update: ViewUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}
