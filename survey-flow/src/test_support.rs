//! In-memory collaborators for testing sessions without I/O.
//!
//! `TestGate`, `RecordingSink`, and `MemoryLog` let you drive a
//! [`SurveySession`](crate::SurveySession) end to end without a host
//! application, an HTTP endpoint, or a filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_flow::{RecordingSink, MemoryLog, SubmissionPipeline, SurveySession, TestGate};
//!
//! let gate = TestGate::identified();
//! let mut session = SurveySession::new(catalog, &gate);
//! let pipeline = SubmissionPipeline::new(RecordingSink::accepting(), MemoryLog::new());
//! // ... answer questions, then:
//! session.submit(&pipeline).await?;
//! ```

use std::convert::Infallible;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use survey_flow_types::SubmissionPayload;

use crate::{AuthGate, DeliveryError, DeliverySink, SubmissionLog};

/// An auth gate with a settable identification state.
///
/// Counts how often the identification challenge was requested, so tests can
/// assert the gating side effect.
#[derive(Debug, Default)]
pub struct TestGate {
    identified: AtomicBool,
    challenges: AtomicU32,
}

impl TestGate {
    /// Create a gate that reports the respondent as identified.
    pub fn identified() -> Self {
        Self {
            identified: AtomicBool::new(true),
            challenges: AtomicU32::new(0),
        }
    }

    /// Create a gate that reports the respondent as not identified.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Change the identification state.
    pub fn set_identified(&self, identified: bool) {
        self.identified.store(identified, Ordering::Relaxed);
    }

    /// How often the identification challenge was requested.
    pub fn challenges(&self) -> u32 {
        self.challenges.load(Ordering::Relaxed)
    }
}

impl AuthGate for TestGate {
    fn is_identified(&self) -> bool {
        self.identified.load(Ordering::Relaxed)
    }

    fn challenge_identification(&self) {
        self.challenges.fetch_add(1, Ordering::Relaxed);
    }
}

/// The outcome a [`RecordingSink`] reports for each delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    /// Confirm delivery.
    Accept,

    /// Report [`DeliveryError::Timeout`].
    Timeout,

    /// Report [`DeliveryError::Network`].
    NetworkError,

    /// Report [`DeliveryError::Server`] with the given status.
    ServerError(u16),
}

/// A delivery sink that records every payload and reports a fixed outcome.
#[derive(Debug)]
pub struct RecordingSink {
    outcome: Mutex<SinkOutcome>,
    deliveries: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingSink {
    /// Create a sink that accepts every delivery.
    pub fn accepting() -> Self {
        Self::with_outcome(SinkOutcome::Accept)
    }

    /// Create a sink with the given fixed outcome.
    pub fn with_outcome(outcome: SinkOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            deliveries: Mutex::new(Vec::new()),
        }
    }

    /// Change the outcome for subsequent deliveries.
    pub fn set_outcome(&self, outcome: SinkOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    /// Every payload delivered so far, oldest first.
    pub fn deliveries(&self) -> Vec<SubmissionPayload> {
        self.deliveries.lock().unwrap().clone()
    }

    /// The number of delivery attempts observed.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

impl DeliverySink for RecordingSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        self.deliveries.lock().unwrap().push(payload.clone());
        match *self.outcome.lock().unwrap() {
            SinkOutcome::Accept => Ok(()),
            SinkOutcome::Timeout => Err(DeliveryError::Timeout),
            SinkOutcome::NetworkError => {
                Err(DeliveryError::network(anyhow::anyhow!("connection refused")))
            }
            SinkOutcome::ServerError(status) => Err(DeliveryError::Server { status }),
        }
    }
}

/// An in-memory submission log.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<SubmissionPayload>>,
}

impl MemoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionLog for MemoryLog {
    type Error = Infallible;

    fn append(&self, payload: &SubmissionPayload) -> Result<(), Self::Error> {
        self.entries.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<SubmissionPayload>, Self::Error> {
        Ok(self.entries.lock().unwrap().clone())
    }
}
