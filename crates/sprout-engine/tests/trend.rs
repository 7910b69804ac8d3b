mod common;

use common::completed_with;
use sprout_core::models::evaluation::{Evaluation, EvaluationStatus};
use sprout_engine::{EngineError, ProgressTrend};

#[test]
fn needs_two_completed_evaluations() {
    let none: Vec<Evaluation> = Vec::new();
    let err = ProgressTrend::new(&none).overall_delta().unwrap_err();
    assert!(matches!(err, EngineError::InsufficientHistory { available: 0 }));

    let one = vec![completed_with(50, &[("a", 50)])];
    let err = ProgressTrend::new(&one).domain_deltas().unwrap_err();
    assert!(matches!(err, EngineError::InsufficientHistory { available: 1 }));
}

#[test]
fn incomplete_evaluations_do_not_count() {
    let mut draft = completed_with(90, &[("a", 90)]);
    draft.status = EvaluationStatus::InProgress;
    let history = vec![completed_with(40, &[("a", 40)]), draft];
    let trend = ProgressTrend::new(&history);
    assert_eq!(trend.len(), 1);
    assert!(trend.overall_delta().is_err());
}

#[test]
fn domain_delta_sign_follows_order() {
    let e1 = completed_with(40, &[("A", 40)]);
    let e2 = completed_with(70, &[("A", 70)]);

    let forward = vec![e1.clone(), e2.clone()];
    let deltas = ProgressTrend::new(&forward).domain_deltas().unwrap();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0].domain_id, "A");
    assert_eq!(deltas[0].delta, 30);

    let backward = vec![e2, e1];
    let deltas = ProgressTrend::new(&backward).domain_deltas().unwrap();
    assert_eq!(deltas[0].delta, -30);
    assert_eq!(ProgressTrend::new(&backward).overall_delta().unwrap(), -30);
}

#[test]
fn unchanged_domain_is_neither_improved_nor_flagged() {
    let history = vec![
        completed_with(55, &[("A", 55)]),
        completed_with(55, &[("A", 55)]),
    ];
    let trend = ProgressTrend::new(&history);
    assert_eq!(trend.overall_delta().unwrap(), 0);
    assert!(trend.top_improved(5).unwrap().is_empty());
    assert!(trend.needs_attention(5).unwrap().is_empty());
}

#[test]
fn new_domain_counts_from_zero() {
    let history = vec![
        completed_with(50, &[("a", 50)]),
        completed_with(60, &[("a", 50), ("b", 70)]),
    ];
    let deltas = ProgressTrend::new(&history).domain_deltas().unwrap();
    let b = deltas.iter().find(|d| d.domain_id == "b").unwrap();
    assert_eq!(b.first, 0);
    assert_eq!(b.delta, 70);
}

#[test]
fn middle_evaluations_do_not_affect_deltas() {
    let history = vec![
        completed_with(30, &[("a", 30)]),
        completed_with(90, &[("a", 90)]),
        completed_with(45, &[("a", 45)]),
    ];
    let trend = ProgressTrend::new(&history);
    assert_eq!(trend.overall_delta().unwrap(), 15);
    let series = trend.domain_series("a");
    let percentages: Vec<_> = series.iter().map(|p| p.percentage).collect();
    assert_eq!(percentages, vec![Some(30), Some(90), Some(45)]);
}

#[test]
fn ranking_breaks_ties_by_domain_id() {
    let history = vec![
        completed_with(50, &[("d", 50), ("c", 50), ("b", 50), ("a", 50), ("e", 50)]),
        completed_with(50, &[("d", 70), ("c", 60), ("b", 70), ("a", 30), ("e", 30)]),
    ];
    let trend = ProgressTrend::new(&history);

    let improved: Vec<_> = trend
        .top_improved(2)
        .unwrap()
        .into_iter()
        .map(|d| d.domain_id)
        .collect();
    assert_eq!(improved, vec!["b", "d"]);

    let attention: Vec<_> = trend
        .needs_attention(5)
        .unwrap()
        .into_iter()
        .map(|d| (d.domain_id, d.delta))
        .collect();
    assert_eq!(attention, vec![("a".to_string(), -20), ("e".to_string(), -20)]);
}

#[test]
fn report_bundles_everything() {
    let history = vec![
        completed_with(40, &[("a", 40), ("b", 60)]),
        completed_with(50, &[("a", 70), ("b", 30)]),
    ];
    let report = ProgressTrend::new(&history).report(3).unwrap();
    assert_eq!(report.evaluations, 2);
    assert_eq!(report.overall_delta, 10);
    assert_eq!(report.domain_deltas.len(), 2);
    assert_eq!(report.top_improved[0].domain_id, "a");
    assert_eq!(report.needs_attention[0].domain_id, "b");
}

#[test]
fn lost_domain_coverage_is_flagged() {
    let mut last = completed_with(50, &[("a", 0), ("b", 50)]);
    let a = last.summary.domain_summaries.get_mut("a").unwrap();
    a.has_data = false;
    a.percentage = 0;
    let history = vec![completed_with(65, &[("a", 80), ("b", 50)]), last];
    let trend = ProgressTrend::new(&history);

    let deltas = trend.domain_deltas().unwrap();
    assert_eq!(deltas.len(), 2);
    assert_eq!(deltas[0].domain_id, "a");
    assert_eq!((deltas[0].first, deltas[0].last, deltas[0].delta), (80, 0, -80));

    let attention = trend.needs_attention(5).unwrap();
    assert_eq!(attention.len(), 1);
    assert_eq!(attention[0].domain_id, "a");
}
