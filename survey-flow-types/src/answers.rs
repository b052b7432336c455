use std::collections::HashMap;

use crate::{AnswerValue, QuestionId};

/// Collected answers for a survey session.
///
/// Keyed by [`QuestionId`], never by position, so catalog order and track
/// changes do not move answers between questions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given question, replacing any prior value.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: AnswerValue) {
        self.values.insert(id.into(), value);
    }

    /// Get the answer for the given question.
    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.values.get(&id)
    }

    /// Check if the given question has an answer.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.values.contains_key(&id)
    }

    /// Remove the answer for the given question.
    pub fn remove(&mut self, id: QuestionId) -> Option<AnswerValue> {
        self.values.remove(&id)
    }

    /// Keep only the answers whose question id satisfies the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(QuestionId) -> bool) {
        self.values.retain(|id, _| keep(*id));
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &AnswerValue)> {
        self.values.iter().map(|(id, value)| (*id, value))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
