//! CLI entry point - the composition root.
//!
//! The GGUF inspector is constructed here and handed to handlers as a
//! `GgufInspectorPort`.

use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use ggscope_cli::{Cli, Commands, handlers};
use ggscope_core::GgufInspectorPort;
use ggscope_gguf::GgufInspector;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Priority: `RUST_LOG` > `--verbose` > `warn`.
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env-backed args see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.default_log_filter())?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut stdout = io::stdout();
    let result = match &command {
        Commands::Inspect { paths, pretty, .. } => {
            let inspector: Arc<dyn GgufInspectorPort> = Arc::new(GgufInspector::new());
            handlers::inspect::execute(inspector, paths, *pretty, command.timeout(), &mut stdout)
                .await
        }
        Commands::Tables => handlers::tables::execute(&mut stdout),
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "Command failed");
        eprintln!("Error: {err}");
        // Exit directly: a timed-out worker must not hold the runtime open.
        std::process::exit(err.exit_code());
    }
    Ok(())
}
