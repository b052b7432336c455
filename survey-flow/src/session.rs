use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use survey_flow_types::{
    AnswerError, AnswerValue, Answers, Catalog, ContactInfo, PayloadEntry, Question, QuestionId,
    QuestionKind, SubmissionPayload,
};
use tracing::{debug, info};

use crate::{AuthGate, DeliveryError, DeliverySink, SubmissionLog, SubmissionPipeline};

/// Where a session stands with respect to submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission has been attempted.
    #[default]
    NotSubmitted,

    /// A delivery attempt is in flight.
    Submitting,

    /// The sink confirmed delivery. Terminal.
    Submitted,

    /// The last delivery attempt failed; the session is intact and
    /// submission may be retried.
    Failed,
}

/// Error raised by [`SurveySession::advance`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    /// The current step has no complete answer.
    #[error("the current step is missing a complete answer")]
    Incomplete,

    /// The gate reported the respondent as not identified. The
    /// identification challenge has been requested; retry once it completes.
    #[error("the respondent is not identified")]
    NotIdentified,
}

/// Error raised by [`SurveySession::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The session is not at the contact step with complete contact details.
    #[error("the session is not ready to submit")]
    NotReady,

    /// The session was already submitted successfully.
    #[error("the session was already submitted")]
    AlreadySubmitted,

    /// Delivery failed; collected data is retained for a retry.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// A respondent's pass through a survey catalog.
///
/// The session owns the cursor into the track-resolved question sequence,
/// the collected answers, and the contact record. The track and the progress
/// fraction are derived on demand from the answers, never stored, so they
/// cannot drift.
///
/// The cursor ranges over `[0, N]` where `N` is the length of the resolved
/// sequence; `cursor == N` is the contact step.
#[derive(Debug)]
pub struct SurveySession<G> {
    catalog: Arc<Catalog>,
    gate: G,
    cursor: usize,
    answers: Answers,
    contact: ContactInfo,
    state: SubmissionState,
}

impl<G: AuthGate> SurveySession<G> {
    /// Create an empty session over `catalog`, gated by `gate`.
    pub fn new(catalog: impl Into<Arc<Catalog>>, gate: G) -> Self {
        Self {
            catalog: catalog.into(),
            gate,
            cursor: 0,
            answers: Answers::new(),
            contact: ContactInfo::default(),
            state: SubmissionState::NotSubmitted,
        }
    }

    /// Get the catalog this session runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The resolved track, derived from the bootstrap question's answer.
    pub fn track(&self) -> Option<&str> {
        self.answers
            .get(self.catalog.bootstrap().id())
            .and_then(AnswerValue::as_choice)
    }

    /// The ordered question sequence applicable to the current track.
    pub fn questions(&self) -> Vec<&Question> {
        self.catalog.resolve(self.track())
    }

    /// The current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The question at the cursor, or `None` at the contact step.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions().get(self.cursor).copied()
    }

    /// Whether the cursor is past the last applicable question.
    pub fn at_contact_step(&self) -> bool {
        self.cursor == self.question_count()
    }

    /// Get the collected answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the contact record.
    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Replace the contact record. Mutable until submission succeeds.
    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    /// Get the submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.state
    }

    /// Record an answer for a question.
    ///
    /// The value's shape must match the question's kind, and choice values
    /// must be drawn from the question's options. Re-answering the bootstrap
    /// question to a different track discards answers whose question is not
    /// in the newly resolved sequence, so stale cross-track answers never
    /// reach a submission.
    pub fn record_answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: AnswerValue,
    ) -> Result<(), AnswerError> {
        let id = id.into();
        let question = self
            .catalog
            .question(id)
            .ok_or(AnswerError::UnknownQuestion(id))?;
        validate_shape(question, &value)?;

        let is_bootstrap = id == self.catalog.bootstrap().id();
        let previous_track = is_bootstrap.then(|| self.track().map(str::to_owned));

        self.answers.insert(id, value);

        if let Some(previous) = previous_track
            && self.track().map(str::to_owned) != previous
        {
            self.prune_orphaned_answers();
        }
        Ok(())
    }

    /// Toggle one option of a multi-select question.
    ///
    /// Selecting an already-selected option removes it; toggling twice
    /// restores the empty set. This is the only mutation path for
    /// multi-select answers.
    pub fn toggle_option(
        &mut self,
        id: impl Into<QuestionId>,
        option: impl Into<String>,
    ) -> Result<(), AnswerError> {
        let id = id.into();
        let option = option.into();
        let question = self
            .catalog
            .question(id)
            .ok_or(AnswerError::UnknownQuestion(id))?;
        let QuestionKind::MultiSelect(choices) = question.kind() else {
            return Err(AnswerError::NotMultiSelect(id));
        };
        if !choices.contains(&option) {
            return Err(AnswerError::UnknownOption { id, option });
        }

        let mut selected = match self.answers.remove(id) {
            Some(AnswerValue::Selections(set)) => set,
            _ => BTreeSet::new(),
        };
        if !selected.remove(&option) {
            selected.insert(option);
        }
        self.answers.insert(id, AnswerValue::Selections(selected));
        Ok(())
    }

    /// Whether the current step is complete enough to advance past.
    ///
    /// Before the contact step this requires a recorded answer for the
    /// current question, non-empty for multi-select. At the contact step it
    /// requires a complete contact record.
    pub fn can_proceed(&self) -> bool {
        match self.current_question() {
            Some(question) => match self.answers.get(question.id()) {
                Some(AnswerValue::Selections(set)) => !set.is_empty(),
                Some(_) => true,
                None => false,
            },
            None => self.contact.is_complete(),
        }
    }

    /// Move the cursor forward by one step, saturating at the contact step.
    ///
    /// Refused while the current step is incomplete. Refused while the gate
    /// reports the respondent as not identified; in that case the
    /// identification challenge is requested and the cursor is untouched.
    pub fn advance(&mut self) -> Result<(), AdvanceError> {
        if !self.can_proceed() {
            return Err(AdvanceError::Incomplete);
        }
        if !self.gate.is_identified() {
            self.gate.challenge_identification();
            return Err(AdvanceError::NotIdentified);
        }
        if self.cursor < self.question_count() {
            self.cursor += 1;
        }
        Ok(())
    }

    /// Move the cursor back by one step, saturating at the first question.
    ///
    /// Always permitted; going back is never gated.
    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The fraction of the resolved sequence the cursor has reached.
    ///
    /// `0.0` while the track is unresolved. This is position reached over
    /// total applicable questions, not questions answered; retreating
    /// recedes it.
    pub fn progress(&self) -> f64 {
        if self.track().is_none() {
            return 0.0;
        }
        self.cursor as f64 / self.question_count() as f64
    }

    /// Build the wire-ready payload for the current answers.
    ///
    /// `None` until the bootstrap question has been answered.
    pub fn payload(&self) -> Option<SubmissionPayload> {
        let track = self.track()?.to_owned();
        let entries = self
            .questions()
            .iter()
            .filter_map(|question| {
                self.answers
                    .get(question.id())
                    .map(|value| PayloadEntry::new(question.prompt(), value.display_value()))
            })
            .collect();
        Some(SubmissionPayload {
            contact: self.contact.clone(),
            track,
            entries,
        })
    }

    /// Submit the completed session through `pipeline`.
    ///
    /// Valid only at the contact step with a complete contact record, and at
    /// most once successfully. On delivery failure the session transitions
    /// to [`SubmissionState::Failed`] with all collected data intact, so the
    /// caller may retry without re-answering anything.
    pub async fn submit<S, L>(
        &mut self,
        pipeline: &SubmissionPipeline<S, L>,
    ) -> Result<(), SubmitError>
    where
        S: DeliverySink,
        L: SubmissionLog,
    {
        if self.state == SubmissionState::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.at_contact_step() || !self.can_proceed() {
            return Err(SubmitError::NotReady);
        }
        let Some(payload) = self.payload() else {
            return Err(SubmitError::NotReady);
        };

        self.state = SubmissionState::Submitting;
        match pipeline.submit(&payload).await {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                info!(track = %payload.track, "submission delivered");
                Ok(())
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                Err(SubmitError::Delivery(err))
            }
        }
    }

    /// Return the session to its empty initial state.
    ///
    /// The catalog and gate are retained.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
        self.contact = ContactInfo::default();
        self.state = SubmissionState::NotSubmitted;
    }

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Drop answers outside the newly resolved sequence and clamp the cursor.
    fn prune_orphaned_answers(&mut self) {
        let keep: HashSet<QuestionId> = self.questions().iter().map(|q| q.id()).collect();
        let before = self.answers.len();
        self.answers.retain(|id| keep.contains(&id));

        let dropped = before - self.answers.len();
        if dropped > 0 {
            debug!(dropped, track = ?self.track(), "track changed; dropped out-of-track answers");
        }

        let count = self.question_count();
        if self.cursor > count {
            self.cursor = count;
        }
    }
}

fn validate_shape(question: &Question, value: &AnswerValue) -> Result<(), AnswerError> {
    let id = question.id();
    match (question.kind(), value) {
        (QuestionKind::FreeText(_), AnswerValue::Text(_)) => Ok(()),
        (
            QuestionKind::SingleSelect(choices) | QuestionKind::SingleChoice(choices),
            AnswerValue::Choice(option),
        ) => {
            if choices.contains(option) {
                Ok(())
            } else {
                Err(AnswerError::UnknownOption {
                    id,
                    option: option.clone(),
                })
            }
        }
        (QuestionKind::MultiSelect(choices), AnswerValue::Selections(selected)) => {
            match selected.iter().find(|option| !choices.contains(option)) {
                Some(option) => Err(AnswerError::UnknownOption {
                    id,
                    option: option.clone(),
                }),
                None => Ok(()),
            }
        }
        (kind, value) => Err(AnswerError::WrongShape {
            id,
            expected: kind.expects(),
            actual: value.shape(),
        }),
    }
}
