//! xray-tool file utilities module.

use crate::config;
use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Reads the whole file into memory.
pub fn read(filepath: &Path) -> Result<Vec<u8>> {
    fs::read(filepath).map_err(|e| Error::OpenFile(e, filepath.into()))
}

/// Opens a file for buffered writing; rewrites existing.
pub fn open_w(filepath: &Path) -> Result<impl Write> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filepath)
        .map_err(|e| Error::CreateFile(e, filepath.into()))?;
    Ok(BufWriter::new(file))
}

/// Checks if the output path denotes the standard output.
pub fn is_stdout(filepath: &Path) -> bool {
    filepath.as_os_str() == config::STDOUT
}

/// Writes the whole buffer into the output path (STDOUT for `-`) and flushes it.
pub fn write_all(filepath: &Path, buffer: &[u8]) -> Result<()> {
    let wrap = |e| Error::WriteFile(e, filepath.into());
    if is_stdout(filepath) {
        let mut output = io::stdout().lock();
        output.write_all(buffer).map_err(wrap)?;
        output.flush().map_err(wrap)
    } else {
        let mut output = open_w(filepath)?;
        output.write_all(buffer).map_err(wrap)?;
        output.flush().map_err(wrap)
    }
}
