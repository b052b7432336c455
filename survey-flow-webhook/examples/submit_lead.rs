//! Submit a completed home-move survey to a real HTTP endpoint.
//!
//! Set `WEBHOOK_URL` to your endpoint; defaults to httpbin's echo.

use example_catalogs::home_move::{self, BUYING};
use survey_flow::{AnswerValue, ContactInfo, SubmissionPipeline, SurveySession, TestGate};
use survey_flow_webhook::{JsonlLog, Transport, WebhookSink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let endpoint = std::env::var("WEBHOOK_URL")
        .unwrap_or_else(|_| "https://httpbin.org/anything".to_string());

    let gate = TestGate::identified();
    let mut session = SurveySession::new(home_move::home_move(), &gate);

    session.record_answer(home_move::INTENT, AnswerValue::choice(BUYING))?;
    session.advance()?;
    session.record_answer(home_move::PRICE_RANGE, AnswerValue::choice("300k-600k"))?;
    session.advance()?;
    session.record_answer(home_move::FINANCING, AnswerValue::choice("Mortgage"))?;
    session.advance()?;
    session.toggle_option(home_move::FEATURES, "Garden")?;
    session.toggle_option(home_move::FEATURES, "Home office")?;
    session.advance()?;
    session.record_answer(home_move::TIMELINE, AnswerValue::choice("0-3 months"))?;
    session.advance()?;
    session.record_answer(home_move::REFERRAL, AnswerValue::choice("A friend"))?;
    session.advance()?;
    session.set_contact(ContactInfo::new("Alice Example", "alice@example.com", "555-0100"));

    let sink = WebhookSink::new(endpoint.parse()?, Transport::Json)?;
    let log = JsonlLog::new("submissions.jsonl");
    let pipeline = SubmissionPipeline::new(sink, log);

    match session.submit(&pipeline).await {
        Ok(()) => println!("delivered to {endpoint}"),
        Err(err) => println!("delivery failed ({err}); kept a local copy in submissions.jsonl"),
    }
    Ok(())
}
