use serde::{Deserialize, Serialize};
use sprout_core::models::score::ScoreValue;
use ts_rs::TS;

use crate::error::ProtocolError;

/// How much credit a score level gives an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Credit {
    /// The lowest value: not achieved / absent. Counts toward the ceiling.
    None,
    /// Emerging skill. Positive, but not mastered.
    Partial,
    /// Achieved / mastered.
    Full,
}

impl Credit {
    pub fn is_positive(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One value of a score vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreLevel {
    pub code: String,
    pub label: String,
    pub credit: Credit,
}

impl ScoreLevel {
    pub fn new(code: &str, label: &str, credit: Credit) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            credit,
        }
    }
}

/// An ordered score vocabulary, lowest level first.
///
/// Exactly one level (the first) carries [`Credit::None`]; it is the value
/// the ceiling rule counts. Every other level is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreValueDomain {
    pub id: String,
    pub levels: Vec<ScoreLevel>,
}

impl ScoreValueDomain {
    pub fn new(id: impl Into<String>, levels: Vec<ScoreLevel>) -> Result<Self, ProtocolError> {
        let domain = Self {
            id: id.into(),
            levels,
        };
        domain.validate()?;
        Ok(domain)
    }

    /// Achieved / not achieved (Portage).
    pub fn two_state() -> Self {
        Self {
            id: "two_state".to_string(),
            levels: vec![
                ScoreLevel::new("not_achieved", "Not achieved", Credit::None),
                ScoreLevel::new("achieved", "Achieved", Credit::Full),
            ],
        }
    }

    /// Absent / emerging / mastered (Carolina).
    pub fn three_state() -> Self {
        Self {
            id: "three_state".to_string(),
            levels: vec![
                ScoreLevel::new("absent", "Absent", Credit::None),
                ScoreLevel::new("emerging", "Emerging", Credit::Partial),
                ScoreLevel::new("mastered", "Mastered", Credit::Full),
            ],
        }
    }

    /// VB-MAPP milestone scoring: 0, 0.5, 1.
    pub fn milestone() -> Self {
        Self {
            id: "milestone".to_string(),
            levels: vec![
                ScoreLevel::new("0", "Not met", Credit::None),
                ScoreLevel::new("0.5", "Partially met", Credit::Partial),
                ScoreLevel::new("1", "Met", Credit::Full),
            ],
        }
    }

    /// ABLLS-R skill rating, 0 to 4. Only the top rating counts as mastered.
    pub fn rating() -> Self {
        Self {
            id: "rating".to_string(),
            levels: vec![
                ScoreLevel::new("0", "0", Credit::None),
                ScoreLevel::new("1", "1", Credit::Partial),
                ScoreLevel::new("2", "2", Credit::Partial),
                ScoreLevel::new("3", "3", Credit::Partial),
                ScoreLevel::new("4", "4", Credit::Full),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ProtocolError> {
        let invalid = |reason: &str| ProtocolError::InvalidValueDomain {
            domain_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.levels.len() < 2 {
            return Err(invalid("at least two levels are required"));
        }
        for (i, level) in self.levels.iter().enumerate() {
            if self.levels[..i].iter().any(|l| l.code == level.code) {
                return Err(invalid(&format!("duplicate code '{}'", level.code)));
            }
            match (i, level.credit) {
                (0, Credit::None) => {}
                (0, _) => return Err(invalid("the first level must carry no credit")),
                (_, Credit::None) => {
                    return Err(invalid("only the first level may carry no credit"));
                }
                _ => {}
            }
        }
        if !self.levels.iter().any(|l| l.credit == Credit::Full) {
            return Err(invalid("no level carries full credit"));
        }
        Ok(())
    }

    pub fn level(&self, value: &ScoreValue) -> Option<&ScoreLevel> {
        self.levels.iter().find(|l| l.code == value.as_str())
    }

    pub fn contains(&self, value: &ScoreValue) -> bool {
        self.level(value).is_some()
    }

    pub fn credit(&self, value: &ScoreValue) -> Option<Credit> {
        self.level(value).map(|l| l.credit)
    }

    pub fn is_lowest(&self, value: &ScoreValue) -> bool {
        self.levels
            .first()
            .is_some_and(|l| l.code == value.as_str())
    }

    pub fn is_positive(&self, value: &ScoreValue) -> bool {
        self.credit(value).is_some_and(|c| c.is_positive())
    }

    /// The lowest value, used for bulk "not achieved" shortcuts.
    pub fn lowest(&self) -> Option<ScoreValue> {
        self.levels.first().map(|l| ScoreValue::new(l.code.as_str()))
    }

    /// The highest full-credit value, used for bulk "achieved" shortcuts.
    pub fn highest(&self) -> Option<ScoreValue> {
        self.levels
            .iter()
            .rev()
            .find(|l| l.credit == Credit::Full)
            .map(|l| ScoreValue::new(l.code.as_str()))
    }
}
