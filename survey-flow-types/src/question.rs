use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question within a catalog.
///
/// Ids are unique and stable for the lifetime of the catalog. Answers are
/// keyed by id, never by position, so reordering a catalog does not change
/// which question an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single question in a survey catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within the catalog.
    id: QuestionId,

    /// The prompt text shown to the respondent. Opaque to the engine.
    prompt: String,

    /// Optional secondary text shown below the prompt.
    help_text: Option<String>,

    /// The kind of question (determines the shape of a valid answer).
    kind: QuestionKind,

    /// The track(s) on which this question is asked.
    audience: Audience,
}

impl Question {
    /// Create a new question asked on every track.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            help_text: None,
            kind,
            audience: Audience::All,
        }
    }

    /// Restrict this question to a single track.
    ///
    /// The label must match one of the bootstrap question's options;
    /// [`Catalog::new`](crate::Catalog::new) rejects anything else.
    pub fn on_track(mut self, label: impl Into<String>) -> Self {
        self.audience = Audience::Track(label.into());
        self
    }

    /// Set the secondary help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the help text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the audience.
    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    /// Check whether this question is asked on the given track.
    pub fn asked_on(&self, track: &str) -> bool {
        match &self.audience {
            Audience::All => true,
            Audience::Track(label) => label == track,
        }
    }
}

/// The track(s) of a survey on which a question is asked.
///
/// A track is identified by the option label of the bootstrap question that
/// selects it, so a catalog supports as many tracks as the bootstrap question
/// has options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    /// Asked on every track, and before a track is chosen.
    All,

    /// Asked only after the respondent has chosen the given track.
    Track(String),
}

/// The kind of question, determining the shape of a valid answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Free-form text input.
    FreeText(FreeTextQuestion),

    /// Exactly one option, presented as a dropdown.
    SingleSelect(ChoiceQuestion),

    /// Any number of options.
    MultiSelect(ChoiceQuestion),

    /// Exactly one option, presented as a row of buttons.
    SingleChoice(ChoiceQuestion),
}

impl QuestionKind {
    /// Create a free-text question without a placeholder.
    pub fn free_text() -> Self {
        Self::FreeText(FreeTextQuestion::new())
    }

    /// Create a single-select question with the given options.
    pub fn single_select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SingleSelect(ChoiceQuestion::new(options))
    }

    /// Create a multi-select question with the given options.
    pub fn multi_select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect(ChoiceQuestion::new(options))
    }

    /// Create a single-choice question with the given options.
    pub fn single_choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SingleChoice(ChoiceQuestion::new(options))
    }

    /// Get the options, if this kind carries any.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::FreeText(_) => None,
            Self::SingleSelect(q) | Self::MultiSelect(q) | Self::SingleChoice(q) => {
                Some(&q.options)
            }
        }
    }

    /// Check if this kind selects exactly one option.
    pub fn is_single_valued_choice(&self) -> bool {
        matches!(self, Self::SingleSelect(_) | Self::SingleChoice(_))
    }

    /// Check if this is a multi-select kind.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, Self::MultiSelect(_))
    }

    /// The answer shape this kind expects, for error messages.
    pub fn expects(&self) -> &'static str {
        match self {
            Self::FreeText(_) => "Text",
            Self::SingleSelect(_) | Self::SingleChoice(_) => "Choice",
            Self::MultiSelect(_) => "Selections",
        }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeTextQuestion {
    /// Optional placeholder shown while the input is empty.
    pub placeholder: Option<String>,
}

impl FreeTextQuestion {
    /// Create a new free-text question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}

/// Configuration for a question answered from a fixed set of options.
///
/// Options are ordered; the order is presentation order. Choice kinds must
/// carry at least one option, enforced by catalog validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    /// The available options, in presentation order.
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `option` is one of this question's options.
    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let question = Question::new(3, "How soon are you looking to move?", {
            QuestionKind::single_choice(["0-3 months", "3-6 months", "6+ months"])
        })
        .on_track("Buying")
        .with_help("A rough estimate is fine.");

        assert_eq!(question.id(), QuestionId(3));
        assert_eq!(question.audience(), &Audience::Track("Buying".to_string()));
        assert_eq!(question.help_text(), Some("A rough estimate is fine."));
        assert_eq!(question.kind().options().map(<[String]>::len), Some(3));
    }

    #[test]
    fn asked_on() {
        let shared = Question::new(1, "Name?", QuestionKind::free_text());
        assert!(shared.asked_on("Buying"));
        assert!(shared.asked_on("Selling"));

        let scoped = Question::new(2, "Budget?", QuestionKind::free_text()).on_track("Buying");
        assert!(scoped.asked_on("Buying"));
        assert!(!scoped.asked_on("Selling"));
    }

    #[test]
    fn expects() {
        assert_eq!(QuestionKind::free_text().expects(), "Text");
        assert_eq!(QuestionKind::single_select(["a"]).expects(), "Choice");
        assert_eq!(QuestionKind::single_choice(["a"]).expects(), "Choice");
        assert_eq!(QuestionKind::multi_select(["a"]).expects(), "Selections");
    }
}
