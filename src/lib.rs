// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod invoker;
pub mod logging;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

pub use crate::command::CommandLine;
pub use crate::config::{ClipMode, DemucsConfig, Engine};
pub use crate::errors::DemucsError;
pub use crate::invoker::Demucs;

use crate::cli::CliArgs;

/// High-level entry point used by `main.rs`.
///
/// - `--dry-run`: print the assembled command line and stop.
/// - otherwise run demucs; in silent mode (no `--stream`) the captured output
///   is printed once the process has finished, since nothing was echoed live.
pub async fn run(args: CliArgs) -> Result<()> {
    let demucs = Demucs::new(args.to_config());

    if args.dry_run {
        println!("{}", demucs.command_line()?);
        debug!("dry-run complete (no execution)");
        return Ok(());
    }

    let output = demucs.run().await?;

    if demucs.config().silent {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

/// Process exit code for a failed [`run`].
///
/// A failing demucs passes its own code through when it fits the `1..=255`
/// range a Unix exit status can carry; everything else maps to 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DemucsError>()
        .and_then(DemucsError::exit_code)
        .filter(|code| (1..=255).contains(code))
        .unwrap_or(1)
}
