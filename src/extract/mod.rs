//! xray-tool extract command implementation.

use std::io::Write;
use std::path::Path;

use crate::config::{Address, FunctionId};
use crate::error::{Error, Result};
use crate::loader::{self, yaml::YamlSledEntry};
use crate::map::SledEntry;
use crate::{filebuf, global};

#[cfg(test)]
mod tests;

/// Extracts the instrumentation map of the input binary into the output file
/// (STDOUT for `-`). The output is not touched unless the whole map is resolved.
pub fn run(input_path: &Path, output_path: &Path) -> Result<()> {
    let map = loader::load(input_path).map_err(|e| Error::Load(Box::new(e), input_path.into()))?;
    global::progress("Loaded instrumentation map from", input_path);
    tracing::debug!(
        "{} sleds of {} functions",
        map.sleds().len(),
        map.function_addresses().len()
    );

    let mut document = Vec::new();
    serialize(map.sleds(), |function| map.function_id(function), &mut document)?;

    filebuf::write_all(output_path, &document)?;
    global::progress("Written instrumentation map to", output_path);
    Ok(())
}

/// Writes sleds with resolved function ids into the output as a YAML sequence.
/// Nothing is written if any sled cannot be resolved.
pub fn serialize<F>(sleds: &[SledEntry], resolve: F, mut output: impl Write) -> Result<()>
where
    F: Fn(Address) -> Option<FunctionId>,
{
    let entries = sleds
        .iter()
        .enumerate()
        .map(|(index, sled)| {
            let id = resolve(sled.function).ok_or(Error::Resolution {
                index,
                function: sled.function,
            })?;
            tracing::debug!(
                "Sled #{} (version {}) at 0x{:x} -> function id {}",
                index,
                sled.version,
                sled.address,
                id
            );
            Ok(YamlSledEntry {
                id,
                address: sled.address,
                function: sled.function,
                kind: sled.kind,
                always_instrument: sled.always_instrument,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let document = serde_yaml::to_string(&entries).map_err(Error::Serialize)?;
    output.write_all(document.as_bytes())?;
    output.flush()?;
    Ok(())
}
