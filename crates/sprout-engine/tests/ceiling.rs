mod common;

use common::{five_item_protocol, scores};
use sprout_engine::ceiling::{CeilingRule, ceiling_report};
use sprout_engine::has_reached_ceiling;
use sprout_protocols::ScoreValueDomain;

#[test]
fn three_trailing_failures_reach_ceiling() {
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[
        ("i1", "achieved"),
        ("i2", "achieved"),
        ("i3", "not_achieved"),
        ("i4", "not_achieved"),
        ("i5", "not_achieved"),
    ]);
    assert!(has_reached_ceiling(&protocol, sequence, &scores));
}

#[test]
fn partial_scoring_does_not_reach_ceiling() {
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[("i1", "achieved"), ("i2", "achieved")]);
    assert!(!has_reached_ceiling(&protocol, sequence, &scores));
}

#[test]
fn positive_score_resets_the_run() {
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[
        ("i1", "not_achieved"),
        ("i2", "not_achieved"),
        ("i3", "achieved"),
        ("i4", "not_achieved"),
        ("i5", "not_achieved"),
    ]);
    assert!(!has_reached_ceiling(&protocol, sequence, &scores));
}

#[test]
fn unscored_gaps_neither_reset_nor_count() {
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];

    let gapped = scores(&[("i1", "not_achieved"), ("i3", "not_achieved"), ("i5", "not_achieved")]);
    assert!(has_reached_ceiling(&protocol, sequence, &gapped));

    let short = scores(&[("i1", "not_achieved"), ("i5", "not_achieved")]);
    assert!(!has_reached_ceiling(&protocol, sequence, &short));
}

#[test]
fn scan_follows_ordinal_order_not_item_order() {
    let mut protocol = five_item_protocol();
    // Store items out of order; ordinals still say i1..i5.
    protocol.domains[0].sequences[0].items.reverse();
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[
        ("i1", "not_achieved"),
        ("i2", "not_achieved"),
        ("i3", "achieved"),
        ("i4", "not_achieved"),
        ("i5", "not_achieved"),
    ]);
    assert!(!has_reached_ceiling(&protocol, sequence, &scores));
}

#[test]
fn emerging_resets_the_run() {
    let values = ScoreValueDomain::three_state();
    let rule = CeilingRule { values: &values, threshold: 3 };
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[
        ("i1", "absent"),
        ("i2", "absent"),
        ("i3", "emerging"),
        ("i4", "absent"),
        ("i5", "absent"),
    ]);
    assert!(!rule.reached(sequence, &scores));
}

#[test]
fn threshold_is_configurable() {
    let mut protocol = five_item_protocol();
    protocol.ceiling_threshold = 2;
    let sequence = &protocol.domains[0].sequences[0];
    let scores = scores(&[("i4", "not_achieved"), ("i5", "not_achieved")]);
    assert!(has_reached_ceiling(&protocol, sequence, &scores));

    protocol.ceiling_threshold = 4;
    let sequence = &protocol.domains[0].sequences[0];
    assert!(!has_reached_ceiling(&protocol, sequence, &scores));
}

#[test]
fn adding_low_scores_keeps_the_ceiling() {
    let protocol = five_item_protocol();
    let sequence = &protocol.domains[0].sequences[0];
    let base = scores(&[
        ("i2", "not_achieved"),
        ("i3", "not_achieved"),
        ("i4", "not_achieved"),
    ]);
    assert!(has_reached_ceiling(&protocol, sequence, &base));

    let mut superset = base.clone();
    superset.extend(scores(&[("i5", "not_achieved"), ("i1", "not_achieved")]));
    assert!(has_reached_ceiling(&protocol, sequence, &superset));
}

#[test]
fn report_lists_reached_sequences() {
    let protocol = five_item_protocol();
    let scores = scores(&[
        ("i3", "not_achieved"),
        ("i4", "not_achieved"),
        ("i5", "not_achieved"),
    ]);
    let report = ceiling_report(&protocol, &scores);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].domain_id, "cognitive");
    assert_eq!(report[0].sequence_id, "seq");
}
