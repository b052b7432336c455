//! # survey-flow
//!
//! A conditional survey engine. Sink-agnostic.
//!
//! The engine drives a branching questionnaire: a validated [`Catalog`] of
//! questions, a bootstrap question whose answer selects the respondent's
//! track, a [`SurveySession`] state machine over the track-resolved question
//! sequence, and a [`SubmissionPipeline`] that persists and delivers the
//! completed survey.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_flow::{
//!     AnswerValue, Catalog, ContactInfo, Question, QuestionKind, SubmissionPipeline,
//!     SurveySession,
//! };
//!
//! let catalog = Catalog::new(vec![
//!     Question::new(1, "Buying or selling?", QuestionKind::single_choice(["Buying", "Selling"])),
//!     Question::new(2, "What is your budget?", QuestionKind::free_text()).on_track("Buying"),
//!     Question::new(3, "Why are you selling?", QuestionKind::free_text()).on_track("Selling"),
//! ])?;
//!
//! let mut session = SurveySession::new(catalog, gate);
//! session.record_answer(1, AnswerValue::choice("Selling"))?;
//! session.advance()?;
//! session.record_answer(3, AnswerValue::text("Relocating"))?;
//! session.advance()?;
//! session.set_contact(ContactInfo::new("Alice", "alice@example.com", "555-0100"));
//!
//! let pipeline = SubmissionPipeline::new(sink, log);
//! session.submit(&pipeline).await?;
//! ```
//!
//! ## Collaborators
//!
//! The host supplies three capabilities at the seams:
//! - [`AuthGate`] - whether the respondent is identified, consulted before
//!   forward navigation
//! - [`DeliverySink`] - where completed submissions go (see the
//!   `survey-flow-webhook` crate for the HTTP backend)
//! - [`SubmissionLog`] - the durable local fallback store

// Re-export all types from survey-flow-types
pub use survey_flow_types::*;

mod gate;
pub use gate::AuthGate;

mod pipeline;
pub use pipeline::{
    DELIVERY_TIMEOUT, DeliveryError, DeliverySink, SubmissionLog, SubmissionPipeline,
};

mod session;
pub use session::{AdvanceError, SubmissionState, SubmitError, SurveySession};

// In-memory collaborators for testing sessions without I/O
mod test_support;
pub use test_support::{MemoryLog, RecordingSink, SinkOutcome, TestGate};
