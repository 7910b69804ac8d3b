#![allow(dead_code)]

use sprout_core::models::evaluation::{Evaluation, EvaluationStatus, NewEvaluation};
use sprout_core::models::score::{ScoreMap, ScoreRecord, ScoreValue};
use sprout_core::models::summary::{DomainSummary, SummarySnapshot};
use sprout_protocols::{
    DEFAULT_CEILING_THRESHOLD, Protocol, ProtocolDomain, ProtocolItem, ProtocolSequence,
    ScoreValueDomain,
};
use uuid::Uuid;

pub fn items(prefix: &str, ages: &[u32]) -> Vec<ProtocolItem> {
    ages.iter()
        .zip(1u32..)
        .map(|(age, ordinal)| ProtocolItem {
            id: format!("{prefix}{ordinal}"),
            text: format!("{prefix} item {ordinal}"),
            age_months: *age,
            ordinal,
        })
        .collect()
}

pub fn domain(id: &str, sequences: Vec<ProtocolSequence>) -> ProtocolDomain {
    ProtocolDomain {
        id: id.to_string(),
        name: id.to_string(),
        sequences,
        description: None,
    }
}

pub fn sequence(id: &str, items: Vec<ProtocolItem>) -> ProtocolSequence {
    ProtocolSequence {
        id: id.to_string(),
        name: id.to_string(),
        items,
    }
}

/// One domain, one sequence of five items i1..i5, two-state values.
pub fn five_item_protocol() -> Protocol {
    Protocol {
        id: "mini".to_string(),
        name: "Mini".to_string(),
        values: ScoreValueDomain::two_state(),
        age_referenced: true,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: vec![domain(
            "cognitive",
            vec![sequence("seq", items("i", &[6, 12, 18, 24, 30]))],
        )],
        description: None,
    }
}

/// Two domains with three-state values: "comm" (c1..c4) and "motor" (m1..m4).
pub fn carolina_like() -> Protocol {
    Protocol {
        id: "carolina_like".to_string(),
        name: "Carolina-like".to_string(),
        values: ScoreValueDomain::three_state(),
        age_referenced: true,
        ceiling_threshold: DEFAULT_CEILING_THRESHOLD,
        domains: vec![
            domain("comm", vec![sequence("comm-seq", items("c", &[6, 12, 18, 24]))]),
            domain("motor", vec![sequence("motor-seq", items("m", &[3, 9, 15, 21]))]),
        ],
        description: None,
    }
}

pub fn scores(pairs: &[(&str, &str)]) -> ScoreMap {
    let now = jiff::Timestamp::now();
    pairs
        .iter()
        .map(|(item, value)| {
            (
                item.to_string(),
                ScoreRecord::new(*item, ScoreValue::new(*value), now),
            )
        })
        .collect()
}

pub fn new_evaluation(protocol_id: &str) -> NewEvaluation {
    NewEvaluation {
        subject_id: Uuid::new_v4(),
        protocol_id: protocol_id.to_string(),
        evaluator_id: "evaluator-7".to_string(),
        evaluator_name: "Sam Okafor".to_string(),
        chronological_age_months: Some(24),
    }
}

/// A completed evaluation carrying only summary data.
pub fn completed_with(overall: u32, domains: &[(&str, u32)]) -> Evaluation {
    let mut evaluation = Evaluation::draft(new_evaluation("mini"), jiff::Timestamp::now());
    evaluation.status = EvaluationStatus::Completed;
    evaluation.completed_at = Some(jiff::Timestamp::now());
    evaluation.summary = SummarySnapshot {
        domain_summaries: domains
            .iter()
            .map(|(id, percentage)| {
                (
                    id.to_string(),
                    DomainSummary {
                        domain_id: id.to_string(),
                        total: 10,
                        mastered_count: percentage / 10,
                        emerging_count: 0,
                        absent_count: 10 - percentage / 10,
                        value_counts: Default::default(),
                        percentage: *percentage,
                        has_data: true,
                        developmental_age_months: None,
                        ceiling_sequences: Vec::new(),
                    },
                )
            })
            .collect(),
        overall_percentage: overall,
        has_data: !domains.is_empty(),
        overall_developmental_age_months: None,
    };
    evaluation
}
