//! Contact page view: form, toast and delivery.

use super::lock;
use crate::delivery::ContactSink;
use crate::form::{ContactField, ContactForm, FieldErrors, SubmitOutcome, SUCCESS_MESSAGE};
use crate::metrics::Metrics;
use crate::notify::{Toast, ToastKind, ToastState};
use crate::timers::TimerSet;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Toast text shown when the sink refuses a submission.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitReport {
    /// Delivered; the form has been cleared.
    Sent { toast: Option<Toast> },
    /// At least one field failed validation.
    Invalid { errors: FieldErrors },
    /// Valid, but the sink failed. Values are kept so the visitor can retry.
    Failed {
        error: String,
        toast: Option<Toast>,
    },
}

/// Everything the contact page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ContactViewState {
    pub form: ContactForm,
    pub toast: Option<Toast>,
}

/// Mounted contact page.
pub struct ContactView {
    form: ContactForm,
    toast: Arc<Mutex<ToastState>>,
    timers: TimerSet,
    sink: Arc<dyn ContactSink>,
    metrics: Metrics,
    toast_duration: Duration,
}

impl ContactView {
    pub fn mount(sink: Arc<dyn ContactSink>, metrics: Metrics, toast_duration: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            toast: Arc::new(Mutex::new(ToastState::new())),
            timers: TimerSet::new("contact"),
            sink,
            metrics,
            toast_duration,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Apply a field edit.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Validate, deliver, and report.
    ///
    /// The form is cleared and the success toast shown only once the sink has
    /// accepted the submission.
    pub async fn submit(&mut self) -> SubmitReport {
        let submission = match self.form.validate() {
            SubmitOutcome::Accepted(submission) => submission,
            SubmitOutcome::Rejected { .. } => {
                self.metrics.record_submission_rejected();
                return SubmitReport::Invalid {
                    errors: self.form.errors().clone(),
                };
            }
        };

        match self.sink.deliver(&submission).await {
            Ok(()) => {
                tracing::info!(sink = self.sink.name(), "Contact message delivered");
                self.metrics.record_submission_accepted();
                self.form.reset();
                SubmitReport::Sent {
                    toast: self.show_toast(SUCCESS_MESSAGE, ToastKind::Success),
                }
            }
            Err(e) => {
                tracing::warn!(sink = self.sink.name(), error = %e, "Contact delivery failed");
                self.metrics.record_delivery_failure();
                SubmitReport::Failed {
                    error: e.to_string(),
                    toast: self.show_toast(DELIVERY_FAILED_MESSAGE, ToastKind::Error),
                }
            }
        }
    }

    /// Show a toast and schedule its expiry.
    fn show_toast(&mut self, message: &str, kind: ToastKind) -> Option<Toast> {
        let (id, toast) = {
            let mut state = lock(&self.toast);
            let id = state.show(message, kind);
            (id, state.latest().cloned())
        };

        let state = Arc::clone(&self.toast);
        self.timers.after(self.toast_duration, move || {
            if lock(&state).expire(id) {
                tracing::debug!(toast_id = id, "Toast expired");
            }
        });

        toast
    }

    /// Hide the toast now. Its expiry timer becomes a no-op.
    pub fn dismiss_toast(&mut self) {
        lock(&self.toast).dismiss();
    }

    /// The toast on screen, if any.
    pub fn toast(&self) -> Option<Toast> {
        lock(&self.toast).visible().cloned()
    }

    pub fn state(&self) -> ContactViewState {
        ContactViewState {
            form: self.form.clone(),
            toast: self.toast(),
        }
    }

    /// Number of timers still pending for this view.
    pub fn active_timers(&self) -> usize {
        self.timers.active()
    }
}

impl std::fmt::Debug for ContactView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactView")
            .field("form", &self.form)
            .field("sink", &self.sink.name())
            .field("timers", &self.timers)
            .finish()
    }
}
