use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A protocol-specific score code (e.g. "achieved", "emerging", "0.5").
///
/// The meaning of a value is defined by the protocol's value domain; this
/// type only carries the code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(as = "String")]
#[ts(export)]
pub struct ScoreValue(String);

impl ScoreValue {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScoreValue {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The recorded score for one protocol item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRecord {
    pub item_id: String,
    pub value: ScoreValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub updated_at: jiff::Timestamp,
}

impl ScoreRecord {
    pub fn new(item_id: impl Into<String>, value: ScoreValue, updated_at: jiff::Timestamp) -> Self {
        Self {
            item_id: item_id.into(),
            value,
            note: None,
            updated_at,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Item id -> score record. Absence of a key means "not yet scored".
pub type ScoreMap = BTreeMap<String, ScoreRecord>;
