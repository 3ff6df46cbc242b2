use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(long, value_name = "HOST", help = "Address to bind (default: 0.0.0.0)")]
    pub host: Option<String>,

    #[arg(
        short,
        long,
        value_name = "PORT",
        help = "Port to listen on (default: $PORT or 10000)"
    )]
    pub port: Option<u16>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory exported files are written to"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Write each session's exports into its own subdirectory")]
    pub isolate_sessions: bool,
}
