use std::collections::HashSet;

use crate::{Audience, CatalogError, Question, QuestionId};

/// The validated, ordered set of all possible questions in a survey.
///
/// The first question is the **bootstrap question**: it is asked on every
/// track and its answer selects the respondent's track, where each of its
/// options names one track. A catalog is immutable once constructed, and
/// [`Catalog::new`] rejects every malformed shape up front so that track
/// resolution never fails at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog from an ordered question list, validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the list is empty, the first question
    /// cannot act as the bootstrap question, an id is duplicated, a choice
    /// question has no options, or a question belongs to a track that no
    /// bootstrap option selects.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let Some(bootstrap) = questions.first() else {
            return Err(CatalogError::Empty);
        };

        if bootstrap.audience() != &Audience::All {
            return Err(CatalogError::BootstrapNotShared(bootstrap.id()));
        }
        if !bootstrap.kind().is_single_valued_choice() {
            return Err(CatalogError::BootstrapKind(bootstrap.id()));
        }

        let tracks: HashSet<&str> = bootstrap
            .kind()
            .options()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateId(question.id()));
            }
            if question.kind().options().is_some_and(<[String]>::is_empty) {
                return Err(CatalogError::NoOptions(question.id()));
            }
            if let Audience::Track(label) = question.audience()
                && !tracks.contains(label.as_str())
            {
                return Err(CatalogError::UnknownTrack {
                    id: question.id(),
                    track: label.clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// Get the bootstrap question.
    pub fn bootstrap(&self) -> &Question {
        // Non-empty by construction.
        &self.questions[0]
    }

    /// Get the track labels, in bootstrap option order.
    pub fn tracks(&self) -> &[String] {
        self.bootstrap().kind().options().unwrap_or_default()
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get all questions, in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A catalog is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Resolve the ordered question sequence applicable to a track.
    ///
    /// With no track chosen yet, the sequence is exactly the bootstrap
    /// question. With a track chosen, it is every question asked on every
    /// track plus those restricted to that track, in catalog order.
    ///
    /// Pure function of its input and the catalog; safe to call repeatedly.
    pub fn resolve(&self, track: Option<&str>) -> Vec<&Question> {
        match track {
            None => vec![self.bootstrap()],
            Some(label) => self
                .questions
                .iter()
                .filter(|q| q.asked_on(label))
                .collect(),
        }
    }
}
