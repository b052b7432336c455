//! Webhook backend for survey-flow.
//!
//! This crate provides the production collaborators for the submission
//! pipeline: [`WebhookSink`] delivers completed surveys to an HTTP endpoint
//! (query-string or JSON-body transport, bounded by the engine's delivery
//! timeout) and [`JsonlLog`] keeps the durable local copy as an append-only
//! JSON-lines file.
//!
//! # Example
//!
//! ```ignore
//! use survey_flow::{SubmissionPipeline, SurveySession};
//! use survey_flow_webhook::{JsonlLog, Transport, WebhookSink};
//!
//! let sink = WebhookSink::new(
//!     "https://hooks.example.com/leads".parse()?,
//!     Transport::Json,
//! )?;
//! let log = JsonlLog::new("submissions.jsonl");
//! let pipeline = SubmissionPipeline::new(sink, log);
//!
//! // ... drive the session to the contact step, then:
//! session.submit(&pipeline).await?;
//! ```

mod sink;
pub use sink::{Transport, WebhookSink};

mod log;
pub use log::{JsonlLog, LogError, StoredSubmission};
