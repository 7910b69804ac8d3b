use sprout_core::error::CoreError;
use sprout_core::models::evaluation::{Evaluation, EvaluationStatus, NewEvaluation};
use sprout_core::models::score::{ScoreRecord, ScoreValue};
use uuid::Uuid;

fn new_input() -> NewEvaluation {
    NewEvaluation {
        subject_id: Uuid::new_v4(),
        protocol_id: "portage".to_string(),
        evaluator_id: "ev-1".to_string(),
        evaluator_name: "Dana Reyes".to_string(),
        chronological_age_months: Some(30),
    }
}

#[test]
fn draft_starts_empty() {
    let now = jiff::Timestamp::now();
    let eval = Evaluation::draft(new_input(), now);
    assert_eq!(eval.status, EvaluationStatus::Draft);
    assert!(eval.scores.is_empty());
    assert!(eval.completed_at.is_none());
    assert!(!eval.summary.has_data);
    assert_eq!(eval.created_at, now);
}

#[test]
fn status_parses_its_own_display() {
    for status in [
        EvaluationStatus::Draft,
        EvaluationStatus::InProgress,
        EvaluationStatus::Completed,
    ] {
        assert_eq!(status.to_string().parse::<EvaluationStatus>().unwrap(), status);
    }
    let err = "finished".parse::<EvaluationStatus>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidStatus(ref s) if s == "finished"));
    assert_eq!(err.to_string(), "invalid evaluation status: finished");
}

#[test]
fn only_completed_is_terminal() {
    assert!(EvaluationStatus::Completed.is_terminal());
    assert!(!EvaluationStatus::InProgress.is_terminal());
    assert!(!EvaluationStatus::Draft.is_terminal());
}

#[test]
fn summary_fields_serialize_at_top_level() {
    let mut eval = Evaluation::draft(new_input(), jiff::Timestamp::now());
    eval.scores.insert(
        "p-1".to_string(),
        ScoreRecord::new("p-1", ScoreValue::new("achieved"), jiff::Timestamp::now())
            .with_note("with prompt"),
    );

    let json = serde_json::to_value(&eval).unwrap();
    assert!(json.get("overall_percentage").is_some());
    assert!(json.get("domain_summaries").is_some());
    assert_eq!(json["status"], "draft");
    assert_eq!(json["scores"]["p-1"]["value"], "achieved");
    assert_eq!(json["scores"]["p-1"]["note"], "with prompt");

    let back: Evaluation = serde_json::from_value(json).unwrap();
    assert_eq!(back, eval);
}

#[test]
fn score_value_is_a_bare_string() {
    let value = ScoreValue::new("0.5");
    assert_eq!(serde_json::to_value(&value).unwrap(), "0.5");
    let back: ScoreValue = serde_json::from_str("\"emerging\"").unwrap();
    assert_eq!(back.as_str(), "emerging");
}
