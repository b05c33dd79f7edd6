//! xray-tool library.
//!
//! Extracts XRay instrumentation maps (tables of function entry/exit sleds)
//! from instrumented binaries and writes them as YAML documents.

#![deny(warnings)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extract;
pub mod global;
pub mod loader;
pub mod map;

mod filebuf;
