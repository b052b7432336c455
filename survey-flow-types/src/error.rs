use crate::QuestionId;

/// Error raised when a catalog definition is malformed.
///
/// Catalog misconfiguration is a construction-time condition: it is reported
/// by [`Catalog::new`](crate::Catalog::new) and never surfaces at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog contains no questions.
    #[error("catalog has no questions")]
    Empty,

    /// The first question is restricted to a single track, so it cannot
    /// bootstrap track selection.
    #[error("bootstrap question {0} must be asked on every track")]
    BootstrapNotShared(QuestionId),

    /// The first question does not select exactly one option, so its answer
    /// cannot determine a track.
    #[error("bootstrap question {0} must be a single-select or single-choice question")]
    BootstrapKind(QuestionId),

    /// Two questions share an id.
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    /// A choice-kind question has an empty option list.
    #[error("question {0} requires at least one option")]
    NoOptions(QuestionId),

    /// A question is restricted to a track that no bootstrap option selects.
    #[error("question {id} belongs to track '{track}', which is not a bootstrap option")]
    UnknownTrack { id: QuestionId, track: String },
}

/// Error raised when a recorded answer does not fit its question.
///
/// The offending mutation is rejected and prior state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// No question with the given id exists in the catalog.
    #[error("no question with id {0}")]
    UnknownQuestion(QuestionId),

    /// The value's shape does not match the question's kind.
    #[error("question {id} expects {expected}, got {actual}")]
    WrongShape {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    /// A chosen option is not one of the question's options.
    #[error("'{option}' is not an option of question {id}")]
    UnknownOption { id: QuestionId, option: String },

    /// Option toggling was attempted on a question that is not multi-select.
    #[error("question {0} is not a multi-select question")]
    NotMultiSelect(QuestionId),
}
