use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ProtocolError;
use crate::values::ScoreValueDomain;

/// Consecutive lowest-value scores that trigger the ceiling rule, unless a
/// protocol sets its own threshold.
pub const DEFAULT_CEILING_THRESHOLD: u32 = 3;

fn default_ceiling_threshold() -> u32 {
    DEFAULT_CEILING_THRESHOLD
}

/// The smallest scoreable unit of a protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolItem {
    pub id: String,
    pub text: String,
    /// Developmental age (months) at which the skill is expected.
    pub age_months: u32,
    /// Position within the sequence; defines ceiling scan order.
    pub ordinal: u32,
}

/// An ordered run of items, e.g. a Carolina sequence or a Portage age bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolSequence {
    pub id: String,
    pub name: String,
    pub items: Vec<ProtocolItem>,
}

/// A skill area such as "Communication" or "Fine Motor".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolDomain {
    pub id: String,
    pub name: String,
    pub sequences: Vec<ProtocolSequence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProtocolDomain {
    pub fn items(&self) -> impl Iterator<Item = &ProtocolItem> {
        self.sequences.iter().flat_map(|s| &s.items)
    }

    pub fn item_count(&self) -> usize {
        self.sequences.iter().map(|s| s.items.len()).sum()
    }

    pub fn sequence(&self, sequence_id: &str) -> Option<&ProtocolSequence> {
        self.sequences.iter().find(|s| s.id == sequence_id)
    }
}

/// A complete assessment instrument definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Protocol {
    pub id: String,
    pub name: String,
    pub values: ScoreValueDomain,
    /// Whether item ages support a developmental-age estimate.
    pub age_referenced: bool,
    #[serde(default = "default_ceiling_threshold")]
    pub ceiling_threshold: u32,
    pub domains: Vec<ProtocolDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Where an item sits inside a protocol.
#[derive(Debug, Clone, Copy)]
pub struct ItemLocation<'a> {
    pub domain: &'a ProtocolDomain,
    pub sequence: &'a ProtocolSequence,
    pub item: &'a ProtocolItem,
}

impl Protocol {
    pub fn domain(&self, domain_id: &str) -> Option<&ProtocolDomain> {
        self.domains.iter().find(|d| d.id == domain_id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ProtocolItem> {
        self.domains.iter().flat_map(|d| d.items())
    }

    pub fn item_count(&self) -> usize {
        self.domains.iter().map(|d| d.item_count()).sum()
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items().any(|i| i.id == item_id)
    }

    pub fn locate(&self, item_id: &str) -> Option<ItemLocation<'_>> {
        self.domains.iter().find_map(|domain| {
            domain.sequences.iter().find_map(|sequence| {
                sequence
                    .items
                    .iter()
                    .find(|i| i.id == item_id)
                    .map(|item| ItemLocation {
                        domain,
                        sequence,
                        item,
                    })
            })
        })
    }

    /// Check the structural invariants the engine relies on.
    ///
    /// Empty domains are accepted here; aggregation reports them.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        self.values.validate()?;

        if self.ceiling_threshold == 0 {
            return Err(ProtocolError::ZeroCeilingThreshold {
                protocol_id: self.id.clone(),
            });
        }

        let mut domain_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for domain in &self.domains {
            if !domain_ids.insert(domain.id.as_str()) {
                return Err(ProtocolError::DuplicateDomain {
                    protocol_id: self.id.clone(),
                    domain_id: domain.id.clone(),
                });
            }
            for sequence in &domain.sequences {
                for pair in sequence.items.windows(2) {
                    let (prev, next) = (&pair[0], &pair[1]);
                    if next.ordinal <= prev.ordinal || next.age_months < prev.age_months {
                        return Err(ProtocolError::UnsortedSequence {
                            sequence_id: sequence.id.clone(),
                            item_id: next.id.clone(),
                        });
                    }
                }
                for item in &sequence.items {
                    if !item_ids.insert(item.id.as_str()) {
                        return Err(ProtocolError::DuplicateItem {
                            protocol_id: self.id.clone(),
                            item_id: item.id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
