//! HTTP delivery of contact submissions.
//!
//! The sink POSTs each submission as JSON using `ureq`. Requests are
//! synchronous; [`ContactSink::deliver`] runs them on tokio's blocking pool
//! so the runtime thread is never blocked.

use super::ContactSink;
use crate::config::Config;
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Delivers submissions to an HTTP endpoint.
#[derive(Clone)]
pub struct HttpContactSink {
    /// Endpoint URL submissions are POSTed to
    endpoint: String,

    /// Optional bearer token
    token: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl HttpContactSink {
    /// Create a sink for `endpoint` using the timeout and token from configuration.
    pub fn new(config: &Config, endpoint: impl Into<String>, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            endpoint: endpoint.into(),
            token: config.contact_endpoint_token.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a sink with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint,
            token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a submission, blocking until the endpoint answers.
    pub fn post(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        let body = serde_json::to_value(submission)?;
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.endpoint);

        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        match request.send_json(body) {
            Ok(response) => {
                tracing::debug!(
                    "POST {} - Success (status: {})",
                    self.endpoint,
                    response.status()
                );
                timer.complete();
                Ok(())
            }
            Err(e) => {
                let error = Self::map_error(e);
                tracing::error!("POST {} - Error: {:?}", self.endpoint, error);
                timer.complete_with_error();
                Err(error)
            }
        }
    }

    /// Map a ureq error to a SubmissionError.
    fn map_error(error: ureq::Error) -> SubmissionError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => SubmissionError::Unauthorized,
                    429 => SubmissionError::RateLimitExceeded,
                    _ => SubmissionError::EndpointError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmissionError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[async_trait]
impl ContactSink for HttpContactSink {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        let sink = self.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || sink.post(&submission))
            .await
            .map_err(|e| SubmissionError::HttpError(format!("Task join error: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation_from_config() {
        let config = Config {
            contact_endpoint_url: Some("https://forms.lotseye.test/contact".to_string()),
            contact_endpoint_token: Some("token".to_string()),
            ..Config::default()
        };
        let sink = HttpContactSink::new(&config, "https://forms.lotseye.test/contact", Metrics::new());

        assert_eq!(sink.endpoint(), "https://forms.lotseye.test/contact");
        assert_eq!(sink.token.as_deref(), Some("token"));
        assert_eq!(sink.name(), "http");

        // Should be able to clone
        let _cloned = sink.clone();
    }
}
