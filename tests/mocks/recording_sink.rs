use async_trait::async_trait;
use lotseye_site::delivery::ContactSink;
use lotseye_site::error::{SubmissionError, SubmissionResult};
use lotseye_site::models::ContactSubmission;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory sink for testing.
///
/// Records every delivered submission and can be switched into a failing
/// mode to exercise the delivery error path.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSink {
    delivered: Arc<Mutex<Vec<ContactSubmission>>>,
    attempts: Arc<Mutex<usize>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following delivery fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Submissions that were accepted.
    pub fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered.lock().unwrap().clone()
    }

    /// Number of deliver calls, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl ContactSink for RecordingSink {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        *self.attempts.lock().unwrap() += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(SubmissionError::EndpointError {
                status: 503,
                message: "unavailable".to_string(),
            });
        }

        self.delivered.lock().unwrap().push(submission.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
