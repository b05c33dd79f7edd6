//! xray-tool options parser.

use std::path::PathBuf;
use structopt::StructOpt;
use xray_tool::config;

#[derive(StructOpt)]
#[structopt(name = "xray", about = "XRay instrumentation tools")]
pub struct Application {
    #[structopt(short, long, help = "Reports progress of the command")]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    #[structopt(about = "Extract instrumentation maps")]
    Extract {
        #[structopt(parse(from_os_str), help = "Path to the input binary")]
        input: PathBuf,

        #[structopt(
            parse(from_os_str),
            short,
            long,
            default_value = config::STDOUT,
            help = "Path to the output file; use '-' for STDOUT"
        )]
        output: PathBuf,
    },
}

/// Constructs an instance of the Application.
pub fn application() -> Application {
    Application::from_args()
}
