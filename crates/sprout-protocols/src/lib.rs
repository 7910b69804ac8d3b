//! sprout-protocols
//!
//! Developmental assessment protocol definitions. Pure data: the domains,
//! sequences, items and score vocabularies of each supported protocol, plus
//! the read-only catalog every other component resolves them through.

pub mod age;
pub mod catalog;
pub mod error;
pub mod protocol;
pub mod protocols;
pub mod values;

pub use catalog::{ProtocolCatalog, ProtocolLoader};
pub use error::ProtocolError;
pub use protocol::{
    DEFAULT_CEILING_THRESHOLD, Protocol, ProtocolDomain, ProtocolItem, ProtocolSequence,
};
pub use values::{Credit, ScoreLevel, ScoreValueDomain};
