//! Drive a session from the bootstrap question to submission using the
//! in-memory collaborators.

use survey_flow::{
    AnswerValue, Catalog, ContactInfo, MemoryLog, Question, QuestionKind, RecordingSink,
    SubmissionLog, SubmissionPipeline, SurveySession, TestGate,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let catalog = Catalog::new(vec![
        Question::new(1, "Are you looking to buy or sell?", {
            QuestionKind::single_choice(["Buying", "Selling"])
        }),
        Question::new(2, "What is your price range?", {
            QuestionKind::single_select(["Under 300k", "300k-600k", "Over 600k"])
        })
        .on_track("Buying"),
        Question::new(3, "Why are you selling?", QuestionKind::free_text()).on_track("Selling"),
        Question::new(4, "How soon do you want to move?", {
            QuestionKind::single_choice(["0-3 months", "3-6 months", "6+ months"])
        }),
    ])?;

    let gate = TestGate::identified();
    let mut session = SurveySession::new(catalog, &gate);

    let answers = [
        (1, AnswerValue::choice("Selling")),
        (3, AnswerValue::text("Relocating for work")),
        (4, AnswerValue::choice("0-3 months")),
    ];
    for (id, value) in answers {
        let question = session.current_question().expect("not at the contact step");
        println!("{:>3}% | {}", (session.progress() * 100.0) as u32, question.prompt());
        session.record_answer(id, value)?;
        session.advance()?;
    }

    println!("{:>3}% | Contact details", (session.progress() * 100.0) as u32);
    session.set_contact(ContactInfo::new("Alice Example", "alice@example.com", "555-0100"));

    let pipeline = SubmissionPipeline::new(RecordingSink::accepting(), MemoryLog::new());
    session.submit(&pipeline).await?;

    println!(
        "submitted; sink saw {} delivery, local log holds {} record(s)",
        pipeline.sink().delivery_count(),
        pipeline.log().read_all()?.len()
    );
    Ok(())
}
