//! Core types for the survey-flow crate.
//!
//! This crate provides the foundational types for defining conditional
//! surveys:
//! - `Catalog` - The validated, ordered set of all possible questions
//! - `Question`, `QuestionKind` and `Audience` - Individual questions, their
//!   input types, and the track(s) they belong to
//! - `AnswerValue` and `Answers` - Collected data, keyed by question id
//! - `ContactInfo` - The respondent record collected after the last question
//! - `SubmissionPayload` - The wire-ready form of a completed survey

mod question;
pub use question::{Audience, ChoiceQuestion, FreeTextQuestion, Question, QuestionId, QuestionKind};

mod answer;
pub use answer::AnswerValue;

mod answers;
pub use answers::Answers;

mod contact;
pub use contact::ContactInfo;

mod catalog;
pub use catalog::Catalog;

mod payload;
pub use payload::{PayloadEntry, SubmissionPayload};

mod error;
pub use error::{AnswerError, CatalogError};
