//! xray-tool loader module.
//!
//! Reads instrumentation maps from files. Every supported format has its own
//! `Loader`; the format of a file is sniffed from its contents.

use crate::error::{Error, Result};
use crate::map::InstrumentationMap;
use crate::{filebuf, global};
use std::path::Path;

pub mod elf;
pub mod yaml;


/// Represents a reader of instrumentation maps of one file format.
pub trait Loader {
    /// Returns name of the format.
    fn name(&self) -> &'static str;

    /// Checks if the contents look like this format.
    fn sniff(&self, data: &[u8]) -> bool;

    /// Reads the instrumentation map from the contents.
    fn load(&self, data: &[u8]) -> Result<InstrumentationMap>;
}

/// Supported formats in order of sniffing.
const LOADERS: &[&dyn Loader] = &[&elf::ElfLoader, &yaml::YamlLoader];

/// Reads the file and returns its instrumentation map.
pub fn load(filepath: &Path) -> Result<InstrumentationMap> {
    global::progress("Loading instrumentation map from", filepath);
    let data = filebuf::read(filepath)?;
    let loader = detect(&data)?;
    tracing::debug!("Loading {} instrumentation map", loader.name());
    loader.load(&data)
}

/// Returns the loader which accepts the contents.
pub fn detect(data: &[u8]) -> Result<&'static dyn Loader> {
    LOADERS
        .iter()
        .copied()
        .find(|loader| loader.sniff(data))
        .ok_or_else(|| match object::FileKind::parse(data) {
            Ok(kind) => Error::UnsupportedFormat(format!("{:?}", kind)),
            Err(_) => Error::UnsupportedFormat("unknown".into()),
        })
}
