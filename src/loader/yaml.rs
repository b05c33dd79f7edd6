//! xray-tool YAML loader.
//!
//! Reads back instrumentation maps previously written by the `extract` command.

use super::Loader;
use crate::config::{Address, FunctionId};
use crate::error::{Error, Result};
use crate::map::{InstrumentationMap, SledEntry, SledKind};
use serde::{Deserialize, Serialize};

/// Represents one sled in the YAML document.
/// Fields are serialized in the order of declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct YamlSledEntry {
    /// Function id.
    pub id: FunctionId,
    /// Address of the instrumented code.
    pub address: Address,
    /// Address of the owning function.
    pub function: Address,
    /// Kind of the instrumentation point.
    pub kind: SledKind,
    /// Whether the point is always instrumented.
    pub always_instrument: bool,
}

/// Reads instrumentation maps in the YAML format.
pub struct YamlLoader;

impl Loader for YamlLoader {
    fn name(&self) -> &'static str {
        "YAML"
    }

    /// Anything which is not an object file may be a YAML document.
    fn sniff(&self, data: &[u8]) -> bool {
        object::FileKind::parse(data).is_err()
    }

    fn load(&self, data: &[u8]) -> Result<InstrumentationMap> {
        let entries: Vec<YamlSledEntry> = serde_yaml::from_slice(data).map_err(Error::Yaml)?;
        Ok(InstrumentationMap::from_identified(entries.into_iter().map(
            |e| {
                let sled = SledEntry {
                    address: e.address,
                    function: e.function,
                    kind: e.kind,
                    always_instrument: e.always_instrument,
                    version: 0,
                };
                (e.id, sled)
            },
        )))
    }
}
