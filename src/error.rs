//! xray-tool error module.

use crate::config::Address;
use std::io;
use std::path::PathBuf;

/// Represents errors of the extractor.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file cannot be turned into an instrumentation map.
    #[error("Cannot extract instrumentation map from '{1}': {0}")]
    Load(#[source] Box<Error>, PathBuf),

    /// Input file cannot be read.
    #[error("Cannot open file '{1}': {0}")]
    OpenFile(#[source] io::Error, PathBuf),
    /// Output file cannot be created.
    #[error("Cannot open file '{1}' for writing: {0}")]
    CreateFile(#[source] io::Error, PathBuf),
    /// Output file cannot be written.
    #[error("Cannot write file '{1}': {0}")]
    WriteFile(#[source] io::Error, PathBuf),
    /// Failure of the output stream.
    #[error("Input/output error: {0}")]
    Io(#[from] io::Error),

    /// Contents are neither an ELF file nor a YAML map.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    /// Malformed object file.
    #[error("Cannot parse object file: {0}")]
    Object(#[from] object::Error),
    /// ELF file of a class other than 64-bit.
    #[error("Instrumentation maps in non-64-bit ELF files are not supported")]
    ElfClass,
    /// No sled table in the binary.
    #[error("Instrumentation map section '{0}' not found")]
    MissingSection(&'static str),
    /// Sled table with a trailing partial entry.
    #[error("Instrumentation map of {0} bytes is not a multiple of the sled entry size")]
    SectionSize(u64),
    /// Unknown kind byte of a sled.
    #[error("Invalid kind {0} of sled #{1}")]
    SledKind(u8, usize),
    /// Malformed YAML map.
    #[error("Cannot parse YAML instrumentation map: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// Sled of a function without an id.
    #[error("Cannot resolve function id of sled #{index} (function 0x{function:x})")]
    Resolution {
        /// Position of the sled in the table.
        index: usize,
        /// Address of the unresolved function.
        function: Address,
    },
    /// Document cannot be rendered.
    #[error("Cannot serialize instrumentation map: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Represents results.
pub type Result<T> = std::result::Result<T, Error>;
