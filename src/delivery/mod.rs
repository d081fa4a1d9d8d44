//! Contact submission delivery.
//!
//! A [`ContactSink`] receives every submission that passes validation. The
//! site has no backend of its own, so the default [`LogSink`] only records
//! the submission in the log; configuring `CONTACT_ENDPOINT_URL` switches to
//! [`HttpContactSink`].

mod http_sink;
pub use http_sink::HttpContactSink;

use crate::config::Config;
use crate::error::SubmissionResult;
use crate::metrics::Metrics;
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Destination for validated contact submissions.
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Hand over one submission.
    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionResult<()>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sink that writes submissions to the log and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl ContactSink for LogSink {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            subject = %submission.subject,
            submitted_at = %submission.submitted_at,
            "Contact form submitted"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Pick the sink the configuration asks for.
pub fn sink_from_config(config: &Config, metrics: Metrics) -> Arc<dyn ContactSink> {
    match &config.contact_endpoint_url {
        Some(endpoint) => Arc::new(HttpContactSink::new(config, endpoint.clone(), metrics)),
        None => Arc::new(LogSink),
    }
}
