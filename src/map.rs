//! xray-tool instrumentation map module.

use crate::config::{Address, FunctionId, Map};
use serde::{Deserialize, Serialize};

/// Represents kinds of instrumentation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SledKind {
    /// Function entry.
    FunctionEnter,
    /// Function exit.
    FunctionExit,
    /// Exit through a tail call.
    TailExit,
    /// Function entry which logs the first argument.
    LogArgsEnter,
    /// Custom event.
    CustomEvent,
    /// Typed custom event.
    TypedEvent,
}

impl TryFrom<u8> for SledKind {
    type Error = u8;

    /// Decodes the kind as it is encoded in the sled table.
    fn try_from(kind: u8) -> std::result::Result<Self, Self::Error> {
        match kind {
            0 => Ok(SledKind::FunctionEnter),
            1 => Ok(SledKind::FunctionExit),
            2 => Ok(SledKind::TailExit),
            3 => Ok(SledKind::LogArgsEnter),
            4 => Ok(SledKind::CustomEvent),
            5 => Ok(SledKind::TypedEvent),
            _ => Err(kind),
        }
    }
}

/// Represents one instrumentation point of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SledEntry {
    /// Address of the instrumented code.
    pub address: Address,
    /// Address of the function which owns the sled.
    pub function: Address,
    /// Kind of the instrumentation point.
    pub kind: SledKind,
    /// Whether the point is always instrumented.
    pub always_instrument: bool,
    /// Version of the sled format.
    pub version: u8,
}

/// Represents the table of sleds with their function identifiers.
#[derive(Default, Debug)]
pub struct InstrumentationMap {
    sleds: Vec<SledEntry>,
    function_ids: Map<Address, FunctionId>,
    function_addresses: Map<FunctionId, Address>,
}

impl InstrumentationMap {
    /// Creates the map assigning function ids the same way the XRay runtime does:
    /// ids start at 1 and a new id is taken every time the owning function changes.
    pub fn from_sleds(sleds: Vec<SledEntry>) -> Self {
        let mut map = InstrumentationMap::default();
        let mut current: Option<Address> = None;
        let mut id: FunctionId = 0;
        for sled in &sleds {
            if current != Some(sled.function) {
                id += 1;
                current = Some(sled.function);
                map.bind(id, sled.function);
            }
        }
        tracing::debug!(
            "InstrumentationMap.from_sleds: {} sleds, {} functions",
            sleds.len(),
            id
        );
        map.sleds = sleds;
        map
    }

    /// Creates the map from sleds paired with already known function ids.
    pub fn from_identified(entries: impl IntoIterator<Item = (FunctionId, SledEntry)>) -> Self {
        let mut map = InstrumentationMap::default();
        for (id, sled) in entries {
            map.bind(id, sled.function);
            map.sleds.push(sled);
        }
        map
    }

    /// Returns sleds in the order of the sled table.
    pub fn sleds(&self) -> &[SledEntry] {
        &self.sleds
    }

    /// Takes a function address and returns its id (if any).
    pub fn function_id(&self, function: Address) -> Option<FunctionId> {
        self.function_ids.get(&function).copied()
    }

    /// Returns all known function addresses indexed by function id.
    pub fn function_addresses(&self) -> &Map<FunctionId, Address> {
        &self.function_addresses
    }

    fn bind(&mut self, id: FunctionId, function: Address) {
        self.function_ids.insert(function, id);
        self.function_addresses.insert(id, function);
    }
}
