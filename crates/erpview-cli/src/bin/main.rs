//! erpview binary entry point
//!
//! This is a thin wrapper that calls the library's `run_cli()` function.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::Result;
use erpview_cli::run_cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
