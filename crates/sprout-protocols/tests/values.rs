use sprout_core::models::score::ScoreValue;
use sprout_protocols::age::{age_band, age_band_label, format_years_months};
use sprout_protocols::{Credit, ScoreValueDomain};

#[test]
fn builtin_value_domains_are_valid() {
    for domain in [
        ScoreValueDomain::two_state(),
        ScoreValueDomain::three_state(),
        ScoreValueDomain::milestone(),
        ScoreValueDomain::rating(),
    ] {
        domain.validate().unwrap();
    }
}

#[test]
fn three_state_credits() {
    let values = ScoreValueDomain::three_state();
    assert_eq!(values.credit(&"mastered".into()), Some(Credit::Full));
    assert_eq!(values.credit(&"emerging".into()), Some(Credit::Partial));
    assert_eq!(values.credit(&"absent".into()), Some(Credit::None));
    assert_eq!(values.credit(&"achieved".into()), None);

    assert!(values.is_lowest(&"absent".into()));
    assert!(!values.is_lowest(&"emerging".into()));
    assert!(values.is_positive(&"emerging".into()));
    assert!(!values.is_positive(&"absent".into()));
}

#[test]
fn shortcut_values() {
    let values = ScoreValueDomain::rating();
    assert_eq!(values.lowest(), Some(ScoreValue::new("0")));
    assert_eq!(values.highest(), Some(ScoreValue::new("4")));
}

#[test]
fn age_band_labels() {
    assert_eq!(age_band_label(0), "0-6 months");
    assert_eq!(age_band_label(6), "0-6 months");
    assert_eq!(age_band_label(10), "6-12 months");
    assert_eq!(age_band_label(24), "18-24 months");
    assert_eq!(age_band_label(30), "24-36 months");
    assert_eq!(age_band(84), (72, 84));
    assert_eq!(age_band(85), (84, 96));
}

#[test]
fn years_and_months_formatting() {
    assert_eq!(format_years_months(8.0), "8m");
    assert_eq!(format_years_months(24.0), "2y");
    assert_eq!(format_years_months(29.6), "2y 6m");
}
