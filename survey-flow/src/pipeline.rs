use std::future::Future;
use std::time::Duration;

use survey_flow_types::SubmissionPayload;
use tracing::{debug, warn};

/// Bound on a single delivery attempt.
///
/// A sink that has not responded within this window must give up and report
/// [`DeliveryError::Timeout`].
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for delivery attempts.
///
/// Delivery failures are ordinary values, never panics: the session state
/// machine turns them into a `Failed` state the caller can retry from.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// No response arrived within [`DELIVERY_TIMEOUT`].
    #[error("delivery timed out")]
    Timeout,

    /// The sink could not be reached (DNS, connection, TLS, ...).
    #[error("network error: {0}")]
    Network(#[from] anyhow::Error),

    /// The sink responded with a non-success status.
    #[error("sink responded with status {status}")]
    Server { status: u16 },
}

impl DeliveryError {
    /// Create a network error from any error type.
    pub fn network(err: impl Into<anyhow::Error>) -> Self {
        Self::Network(err.into())
    }
}

/// A sink that completed submissions are delivered to.
///
/// Implementations must bound each attempt by [`DELIVERY_TIMEOUT`] and map
/// every failure mode onto a [`DeliveryError`] variant rather than panicking.
pub trait DeliverySink {
    /// Attempt to deliver `payload` once.
    fn deliver(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// Durable, append-only local store of submitted payloads.
///
/// The log is the fallback that guarantees no submission is silently lost
/// when the sink is unreachable. Appends from concurrent sessions must not
/// corrupt prior entries; nothing is ever edited in place.
pub trait SubmissionLog {
    /// The error type for this log.
    type Error: Into<anyhow::Error>;

    /// Append one payload to the log.
    fn append(&self, payload: &SubmissionPayload) -> Result<(), Self::Error>;

    /// Read every stored payload, oldest first.
    fn read_all(&self) -> Result<Vec<SubmissionPayload>, Self::Error>;
}

/// Formats, persists, and delivers completed submissions.
///
/// The payload is appended to the local log before the delivery attempt, so
/// the local copy exists even when the sink is permanently unreachable. There
/// is no idempotency key: retrying after a failure that actually reached the
/// sink produces a duplicate remote record. Known limitation.
#[derive(Debug, Clone)]
pub struct SubmissionPipeline<S, L> {
    sink: S,
    log: L,
}

impl<S: DeliverySink, L: SubmissionLog> SubmissionPipeline<S, L> {
    /// Create a pipeline from a sink and a local log.
    pub fn new(sink: S, log: L) -> Self {
        Self { sink, log }
    }

    /// Get the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get the local log.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Persist `payload` locally, then attempt delivery.
    ///
    /// A failed local append is logged and does not abort the delivery
    /// attempt; the session keeps its collected data either way.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        if let Err(err) = self.log.append(payload) {
            let err = err.into();
            warn!(error = %err, "failed to append submission to the local log");
        }

        debug!(
            track = %payload.track,
            entries = payload.entries.len(),
            "delivering submission"
        );
        match self.sink.deliver(payload).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "submission delivery failed");
                Err(err)
            }
        }
    }
}
