//! Clinical reading of developmental ages and percentages.

use serde::{Deserialize, Serialize};

use sprout_core::models::evaluation::Evaluation;

/// Developmental quotient bands. Cut-offs follow the usual one and two
/// standard-deviation convention (mean 100, SD 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentBand {
    Advanced,
    Typical,
    MildDelay,
    SignificantDelay,
}

pub fn classify_quotient(quotient: f64) -> DevelopmentBand {
    if quotient >= 115.0 {
        DevelopmentBand::Advanced
    } else if quotient >= 85.0 {
        DevelopmentBand::Typical
    } else if quotient >= 70.0 {
        DevelopmentBand::MildDelay
    } else {
        DevelopmentBand::SignificantDelay
    }
}

/// Developmental age as a percentage of chronological age.
pub fn developmental_quotient(
    developmental_age_months: f64,
    chronological_age_months: u32,
) -> Option<f64> {
    if chronological_age_months == 0 {
        return None;
    }
    Some(developmental_age_months / f64::from(chronological_age_months) * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryBand {
    /// 80% and above.
    Consolidated,
    /// 50% to 79%.
    Developing,
    /// Below 50%.
    NeedsSupport,
}

pub fn mastery_band(percentage: u32) -> MasteryBand {
    match percentage {
        80.. => MasteryBand::Consolidated,
        50..=79 => MasteryBand::Developing,
        _ => MasteryBand::NeedsSupport,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInterpretation {
    pub developmental_age_months: f64,
    pub chronological_age_months: u32,
    pub quotient: f64,
    /// Positive when development lags chronological age.
    pub delay_months: f64,
    pub band: DevelopmentBand,
}

/// Compare an evaluation's overall developmental age against the subject's
/// age at evaluation. `None` when either age is unknown.
pub fn interpret_evaluation(evaluation: &Evaluation) -> Option<AgeInterpretation> {
    let developmental = evaluation.summary.overall_developmental_age_months?;
    let chronological = evaluation.chronological_age_months?;
    let quotient = developmental_quotient(developmental, chronological)?;
    Some(AgeInterpretation {
        developmental_age_months: developmental,
        chronological_age_months: chronological,
        quotient,
        delay_months: f64::from(chronological) - developmental,
        band: classify_quotient(quotient),
    })
}
