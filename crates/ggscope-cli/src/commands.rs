//! Subcommand definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;

/// Available `ggscope` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the metadata summary of one or more GGUF files as JSON
    Inspect {
        /// GGUF files to inspect
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
        /// Pretty-print each JSON envelope
        #[arg(long)]
        pretty: bool,
        /// Give up on a file after this many seconds
        #[arg(
            long,
            env = "GGSCOPE_TIMEOUT_SECS",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout_secs: Option<u64>,
    },

    /// Print the GGML tensor type and file type lookup tables
    Tables,
}

impl Commands {
    /// Per-file deadline for `inspect`, if one was given.
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Inspect { timeout_secs, .. } => timeout_secs.map(Duration::from_secs),
            Self::Tables => None,
        }
    }
}
