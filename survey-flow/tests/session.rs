//! Integration tests driving a full session against in-memory collaborators.

use survey_flow::{
    AdvanceError, AnswerError, AnswerValue, Catalog, ContactInfo, MemoryLog, Question, QuestionId,
    QuestionKind, RecordingSink, SinkOutcome, SubmissionLog, SubmissionPipeline, SubmissionState,
    SubmitError, SurveySession, TestGate,
};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Question::new(1, "Are you buying or selling?", {
            QuestionKind::single_choice(["Buying", "Selling"])
        }),
        Question::new(2, "What is your price range?", {
            QuestionKind::single_select(["Under 300k", "300k-600k", "Over 600k"])
        })
        .on_track("Buying"),
        Question::new(3, "Which features matter to you?", {
            QuestionKind::multi_select(["Garage", "Garden", "Pool"])
        })
        .on_track("Buying"),
        Question::new(4, "Why are you selling?", QuestionKind::free_text())
            .with_help("A sentence or two is plenty.")
            .on_track("Selling"),
        Question::new(5, "How soon do you want to move?", {
            QuestionKind::single_choice(["0-3 months", "3-6 months", "6+ months"])
        }),
    ])
    .unwrap()
}

fn contact() -> ContactInfo {
    ContactInfo::new("Alice Example", "alice@example.com", "555-0100")
}

/// Walk a session to the contact step on the Buying track.
fn answered_session(gate: &TestGate) -> SurveySession<&TestGate> {
    let mut session = SurveySession::new(catalog(), gate);
    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();
    session.advance().unwrap();
    session
        .record_answer(2, AnswerValue::choice("300k-600k"))
        .unwrap();
    session.advance().unwrap();
    session.toggle_option(3, "Garage").unwrap();
    session.toggle_option(3, "Garden").unwrap();
    session.advance().unwrap();
    session
        .record_answer(5, AnswerValue::choice("0-3 months"))
        .unwrap();
    session.advance().unwrap();
    assert!(session.at_contact_step());
    session.set_contact(contact());
    session
}

#[test]
fn resolution_is_pure() {
    let catalog = catalog();
    for track in [None, Some("Buying"), Some("Selling")] {
        assert_eq!(catalog.resolve(track), catalog.resolve(track));
    }
}

#[test]
fn answer_shape_is_validated() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);
    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();

    assert!(matches!(
        session.record_answer(2, AnswerValue::choice("A million")),
        Err(AnswerError::UnknownOption { .. })
    ));
    assert!(matches!(
        session.record_answer(2, AnswerValue::text("300k-600k")),
        Err(AnswerError::WrongShape { .. })
    ));
    session
        .record_answer(2, AnswerValue::choice("300k-600k"))
        .unwrap();
}

#[test]
fn toggling_twice_restores_the_empty_set() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);
    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();

    session.toggle_option(3, "Pool").unwrap();
    session.toggle_option(3, "Pool").unwrap();

    let selections = session
        .answers()
        .get(QuestionId(3))
        .and_then(AnswerValue::as_selections)
        .unwrap();
    assert!(selections.is_empty());
}

#[test]
fn progress_rises_monotonically_to_one() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);

    assert_eq!(session.progress(), 0.0);

    let answers = [
        (1, AnswerValue::choice("Selling")),
        (4, AnswerValue::text("Downsizing")),
        (5, AnswerValue::choice("3-6 months")),
    ];
    let mut last = 0.0;
    for (id, value) in answers {
        session.record_answer(id, value).unwrap();
        session.advance().unwrap();
        let progress = session.progress();
        assert!(progress >= last, "progress receded: {last} -> {progress}");
        last = progress;
    }

    assert_eq!(last, 1.0);
    assert!(session.at_contact_step());
}

#[test]
fn progress_recedes_on_retreat() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);
    session
        .record_answer(1, AnswerValue::choice("Selling"))
        .unwrap();
    session.advance().unwrap();

    let reached = session.progress();
    session.retreat();
    assert!(session.progress() < reached);
}

#[test]
fn switching_track_discards_orphaned_answers() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);

    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();
    session
        .record_answer(2, AnswerValue::choice("Under 300k"))
        .unwrap();

    session
        .record_answer(1, AnswerValue::choice("Selling"))
        .unwrap();

    assert!(!session.answers().contains(QuestionId(2)));
    let payload_prompts: Vec<String> = session
        .payload()
        .unwrap()
        .entries
        .into_iter()
        .map(|entry| entry.prompt)
        .collect();
    assert!(!payload_prompts.contains(&"What is your price range?".to_string()));
}

#[tokio::test]
async fn failed_delivery_keeps_data_and_logs_locally() {
    let gate = TestGate::identified();
    let mut session = answered_session(&gate);
    let pipeline = SubmissionPipeline::new(
        RecordingSink::with_outcome(SinkOutcome::Timeout),
        MemoryLog::new(),
    );

    let result = session.submit(&pipeline).await;

    assert!(matches!(result, Err(SubmitError::Delivery(_))));
    assert_eq!(session.submission_state(), SubmissionState::Failed);

    // The local copy exists even though the sink never confirmed.
    let logged = pipeline.log().read_all().unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].contact, contact());

    // Nothing was cleared; a retry is possible without re-answering.
    assert!(!session.answers().is_empty());
    assert!(session.contact().is_complete());

    pipeline.sink().set_outcome(SinkOutcome::Accept);
    session.submit(&pipeline).await.unwrap();
    assert_eq!(session.submission_state(), SubmissionState::Submitted);

    // At-least-once: the retry appended a second local copy.
    assert_eq!(pipeline.log().read_all().unwrap().len(), 2);
    assert_eq!(pipeline.sink().delivery_count(), 2);
}

#[tokio::test]
async fn successful_submission_is_terminal() {
    let gate = TestGate::identified();
    let mut session = answered_session(&gate);
    let pipeline = SubmissionPipeline::new(RecordingSink::accepting(), MemoryLog::new());

    session.submit(&pipeline).await.unwrap();
    assert_eq!(session.submission_state(), SubmissionState::Submitted);

    let result = session.submit(&pipeline).await;
    assert!(matches!(result, Err(SubmitError::AlreadySubmitted)));
    assert_eq!(pipeline.sink().delivery_count(), 1);
}

#[tokio::test]
async fn submit_requires_the_contact_step() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);
    let pipeline = SubmissionPipeline::new(RecordingSink::accepting(), MemoryLog::new());

    let result = session.submit(&pipeline).await;
    assert!(matches!(result, Err(SubmitError::NotReady)));
    assert_eq!(pipeline.sink().delivery_count(), 0);

    let mut session = answered_session(&gate);
    session.set_contact(ContactInfo::default());
    let result = session.submit(&pipeline).await;
    assert!(matches!(result, Err(SubmitError::NotReady)));
}

#[test]
fn advancement_is_gated_on_identification() {
    let gate = TestGate::anonymous();
    let mut session = SurveySession::new(catalog(), &gate);
    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();

    let result = session.advance();
    assert_eq!(result, Err(AdvanceError::NotIdentified));
    assert_eq!(session.cursor(), 0);
    assert_eq!(gate.challenges(), 1);

    gate.set_identified(true);
    session.advance().unwrap();
    assert_eq!(session.cursor(), 1);
    assert_eq!(gate.challenges(), 1);
}

#[test]
fn retreat_is_never_gated() {
    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog(), &gate);
    session
        .record_answer(1, AnswerValue::choice("Buying"))
        .unwrap();
    session.advance().unwrap();

    gate.set_identified(false);
    session.retreat();
    assert_eq!(session.cursor(), 0);
    assert_eq!(gate.challenges(), 0);
}

#[tokio::test]
async fn delivered_payload_matches_the_answers() {
    let gate = TestGate::identified();
    let mut session = answered_session(&gate);
    let pipeline = SubmissionPipeline::new(RecordingSink::accepting(), MemoryLog::new());

    session.submit(&pipeline).await.unwrap();

    let deliveries = pipeline.sink().deliveries();
    assert_eq!(deliveries.len(), 1);
    let payload = &deliveries[0];
    assert_eq!(payload.track, "Buying");
    assert_eq!(payload.contact, contact());

    let features = payload
        .entries
        .iter()
        .find(|entry| entry.prompt == "Which features matter to you?")
        .unwrap();
    assert_eq!(features.value, "Garage, Garden");

    let pairs = payload.query_pairs();
    assert_eq!(pairs[3], ("track".to_string(), "Buying".to_string()));
}
