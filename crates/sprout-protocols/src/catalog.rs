use std::collections::HashSet;

use tracing::debug;

use crate::error::ProtocolError;
use crate::protocol::{Protocol, ProtocolDomain, ProtocolItem, ProtocolSequence};
use crate::protocols;

/// Source of protocol definitions. The catalog is built from whatever the
/// caller injects: the built-in set, a JSON file, or something else.
pub trait ProtocolLoader {
    fn load(&self) -> Result<Vec<Protocol>, ProtocolError>;
}

/// Loads the protocols compiled into this crate.
pub struct BuiltinLoader;

impl ProtocolLoader for BuiltinLoader {
    fn load(&self) -> Result<Vec<Protocol>, ProtocolError> {
        Ok(protocols::all_protocols())
    }
}

/// Loads protocols from a JSON array.
pub struct JsonLoader<'a> {
    pub json: &'a str,
}

impl ProtocolLoader for JsonLoader<'_> {
    fn load(&self) -> Result<Vec<Protocol>, ProtocolError> {
        Ok(serde_json::from_str(self.json)?)
    }
}

/// Read-only set of validated protocols.
#[derive(Debug, Clone)]
pub struct ProtocolCatalog {
    protocols: Vec<Protocol>,
}

impl ProtocolCatalog {
    pub fn new(protocols: Vec<Protocol>) -> Result<Self, ProtocolError> {
        let mut seen = HashSet::new();
        for protocol in &protocols {
            if !seen.insert(protocol.id.as_str()) {
                return Err(ProtocolError::DuplicateProtocol(protocol.id.clone()));
            }
            protocol.validate()?;
        }
        debug!(count = protocols.len(), "protocol catalog loaded");
        Ok(Self { protocols })
    }

    pub fn load(loader: &dyn ProtocolLoader) -> Result<Self, ProtocolError> {
        Self::new(loader.load()?)
    }

    pub fn builtin() -> Result<Self, ProtocolError> {
        Self::load(&BuiltinLoader)
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Self::load(&JsonLoader { json })
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    pub fn get_protocol(&self, protocol_id: &str) -> Result<&Protocol, ProtocolError> {
        self.protocols
            .iter()
            .find(|p| p.id == protocol_id)
            .ok_or_else(|| ProtocolError::ProtocolNotFound(protocol_id.to_string()))
    }

    pub fn get_domain(
        &self,
        protocol_id: &str,
        domain_id: &str,
    ) -> Result<&ProtocolDomain, ProtocolError> {
        self.get_protocol(protocol_id)?
            .domain(domain_id)
            .ok_or_else(|| ProtocolError::DomainNotFound {
                protocol_id: protocol_id.to_string(),
                domain_id: domain_id.to_string(),
            })
    }

    pub fn get_item(&self, protocol_id: &str, item_id: &str) -> Option<&ProtocolItem> {
        self.get_protocol(protocol_id)
            .ok()?
            .locate(item_id)
            .map(|loc| loc.item)
    }

    /// Find a sequence by id anywhere in a protocol.
    pub fn find_sequence(&self, protocol_id: &str, sequence_id: &str) -> Option<&ProtocolSequence> {
        self.get_protocol(protocol_id)
            .ok()?
            .domains
            .iter()
            .find_map(|d| d.sequence(sequence_id))
    }

    /// Replace a protocol's ceiling threshold (configuration override).
    pub fn set_ceiling_threshold(
        &mut self,
        protocol_id: &str,
        threshold: u32,
    ) -> Result<(), ProtocolError> {
        if threshold == 0 {
            return Err(ProtocolError::ZeroCeilingThreshold {
                protocol_id: protocol_id.to_string(),
            });
        }
        let protocol = self
            .protocols
            .iter_mut()
            .find(|p| p.id == protocol_id)
            .ok_or_else(|| ProtocolError::ProtocolNotFound(protocol_id.to_string()))?;
        debug!(protocol_id, threshold, "ceiling threshold overridden");
        protocol.ceiling_threshold = threshold;
        Ok(())
    }
}
