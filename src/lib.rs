//! Booking Form - validation and submission controller for a website booking form.
//!
//! This library validates the four contact fields and the attachment set of a
//! booking modal, keeps the submit control in sync with aggregate validity,
//! and delivers accepted requests through an email transport.
//!
//! # Architecture
//!
//! - **domain**: Field rules and validated value objects
//! - **form**: File checks and the aggregate form state
//! - **controller**: Event handlers and the submission state machine
//! - **view**: Side-effect channel to the UI
//! - **transport**: EmailJS HTTP client and the async transport trait
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod events;
pub mod form;
pub mod metrics;
pub mod models;
pub mod transport;
pub mod view;

pub use config::Config;
pub use controller::{FormController, SubmissionOutcome, SubmissionSettings, SubmissionState};
pub use error::{ConfigError, EventError, TransportError};
pub use events::{EventReader, FormEvent};
pub use form::{check_files, recompute_validity, Field, FieldValues, FileCheckResult, FormState};
pub use metrics::{Metrics, MetricsSummary, RequestTimer};
pub use models::{BookingRequest, FileEntry, FileSelection, TemplateParams};
pub use transport::{AsyncEmailJsClient, EmailJsClient, EmailTransport, TransportResponse};
pub use view::{ConsoleView, FeedbackKind, FormView, ViewUpdate};
