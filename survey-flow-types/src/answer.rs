use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single answer value recorded for a question.
///
/// The variant must match the question's kind: `Text` for free-text
/// questions, `Choice` for single-select and single-choice questions,
/// `Selections` for multi-select questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerValue {
    /// Free-form text.
    Text(String),

    /// Exactly one option, drawn from the question's options.
    Choice(String),

    /// A set of options, each drawn from the question's options.
    ///
    /// Duplicates are impossible and insertion order is irrelevant. The set
    /// may be empty while the respondent is still on the question; advancing
    /// past it requires at least one selection.
    Selections(BTreeSet<String>),
}

impl AnswerValue {
    /// Create a text answer.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a choice answer.
    pub fn choice(option: impl Into<String>) -> Self {
        Self::Choice(option.into())
    }

    /// Create a selections answer from any collection of options.
    pub fn selections<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selections(options.into_iter().map(Into::into).collect())
    }

    /// Try to get this value as free-form text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a single chosen option.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a selection set.
    pub fn as_selections(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Selections(set) => Some(set),
            _ => None,
        }
    }

    /// Get the shape name of this value for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Selections(_) => "Selections",
        }
    }

    /// Render this value as a single display string.
    ///
    /// Selection sets are joined with `", "`; this is the form used in
    /// submission payloads.
    pub fn display_value(&self) -> String {
        match self {
            Self::Text(s) | Self::Choice(s) => s.clone(),
            Self::Selections(set) => set.iter().cloned().collect::<Vec<_>>().join(", "),
        }
    }
}
