// src/invoker.rs

//! The `Demucs` invoker: configuration in, captured tool output out.

use tracing::{info, warn};

use crate::command::{build_command, CommandLine};
use crate::config::DemucsConfig;
use crate::errors::{DemucsError, Result};
use crate::exec::{CapturePolicy, CommandRunner, ProcessRunner};

/// Runs the separation tool for one [`DemucsConfig`].
///
/// ```no_run
/// # async fn example() -> vox_demucs::errors::Result<()> {
/// use vox_demucs::{Demucs, DemucsConfig};
///
/// let output = Demucs::init(DemucsConfig {
///     device: Some("cuda".to_string()),
///     ..DemucsConfig::new("path/to/file.mp3", "output-folder")
/// })
/// .run()
/// .await?;
/// println!("{output}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Demucs<R = ProcessRunner> {
    config: DemucsConfig,
    runner: R,
}

impl Demucs<ProcessRunner> {
    pub fn new(config: DemucsConfig) -> Self {
        Self::with_runner(config, ProcessRunner)
    }

    /// Alias for [`Demucs::new`].
    pub fn init(config: DemucsConfig) -> Self {
        Self::new(config)
    }
}

impl<R: CommandRunner> Demucs<R> {
    pub fn with_runner(config: DemucsConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &DemucsConfig {
        &self.config
    }

    /// The exact command [`Demucs::run`] would execute, without executing it.
    pub fn command_line(&self) -> Result<CommandLine> {
        build_command(&self.config)
    }

    /// Run the tool once and return its stdout followed by its stderr.
    ///
    /// Fails without spawning anything when the input path is blank, and
    /// fails with [`DemucsError::ProcessFailed`] when the tool exits
    /// non-zero; no partial output is returned in that case.
    pub async fn run(&self) -> Result<String> {
        let command = self.command_line()?;
        let silent = self.config.silent;
        let policy = CapturePolicy::for_silent(silent);

        if !silent {
            info!(program = %command.program, "Executing command: {command}");
        }

        let output = self.runner.execute(&command, policy).await?;

        if !output.success() {
            if !silent {
                warn!(program = %command.program, exit_code = output.code, "separation process failed");
            }
            return Err(DemucsError::ProcessFailed {
                code: output.code,
                stderr: output.stderr,
            });
        }

        Ok(output.combined())
    }
}
