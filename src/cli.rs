// File: src/cli.rs
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries reports.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("WORDSTATS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Turns a run result into the process exit code, printing failures as
/// `[ERROR] <context>: <cause>` on `err`.
pub fn finish<W: Write>(result: anyhow::Result<()>, err: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}
