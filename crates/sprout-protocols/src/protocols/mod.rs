//! Built-in protocols.
//!
//! These carry the domain structure of each instrument with a representative
//! item set. Deployments that need the full published item lists load them
//! as JSON through [`crate::catalog::JsonLoader`].

pub mod ablls_r;
pub mod carolina;
pub mod portage;
pub mod vb_mapp;

use crate::protocol::{ProtocolDomain, ProtocolItem, ProtocolSequence};
use crate::Protocol;

/// `(age_months, text)`
pub(crate) type ItemDef = (u32, &'static str);
/// `(sequence_id, name, items)`
pub(crate) type SequenceDef = (&'static str, &'static str, &'static [ItemDef]);
/// `(domain_id, name, sequences)`
pub(crate) type DomainDef = (&'static str, &'static str, &'static [SequenceDef]);

pub(crate) fn build_domains(defs: &[DomainDef]) -> Vec<ProtocolDomain> {
    defs.iter()
        .map(|(id, name, sequences)| ProtocolDomain {
            id: id.to_string(),
            name: name.to_string(),
            sequences: sequences.iter().map(build_sequence).collect(),
            description: None,
        })
        .collect()
}

fn build_sequence((id, name, items): &SequenceDef) -> ProtocolSequence {
    ProtocolSequence {
        id: id.to_string(),
        name: name.to_string(),
        items: items
            .iter()
            .zip(1u32..)
            .map(|((age_months, text), ordinal)| ProtocolItem {
                id: format!("{id}-{ordinal:02}"),
                text: text.to_string(),
                age_months: *age_months,
                ordinal,
            })
            .collect(),
    }
}

/// Return all built-in protocols.
pub fn all_protocols() -> Vec<Protocol> {
    vec![
        portage::protocol(),
        carolina::protocol(),
        ablls_r::protocol(),
        vb_mapp::protocol(),
    ]
}
