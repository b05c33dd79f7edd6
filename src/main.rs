//! xray-tool main module.
//!
//! This program works with binaries instrumented by the XRay compiler pass.
//!
//! The `extract` command reads the table of instrumentation sleds embedded into
//! the `xray_instr_map` section of a 64-bit ELF binary (or a previously extracted
//! YAML map) and writes it as a YAML sequence:
//!     `xray extract ./instrumented-binary -o map.yaml`

#![forbid(unsafe_code)]
#![deny(warnings)]

mod cli;

use tracing_subscriber::EnvFilter;
use xray_tool::error::Result;
use xray_tool::{config, extract, global};

fn main() {
    init_logger();
    if let Err(err) = execute(cli::application()) {
        eprintln!("Error: {}", err);
        std::process::exit(config::FAILURE);
    }
}

/// Initializes the logger; logs go to STDERR to keep documents on STDOUT intact.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches CLI commands.
fn execute(app: cli::Application) -> Result<()> {
    global::set_verbose(app.verbose);

    match app.cmd {
        cli::Command::Extract { input, output } => {
            extract::run(&input, &output)?;
        }
    }

    Ok(())
}
