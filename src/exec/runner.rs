// src/exec/runner.rs

//! Pluggable process runner abstraction.
//!
//! The invoker talks to a `CommandRunner` instead of spawning processes
//! itself. Production code uses [`super::ProcessRunner`]; tests can provide a
//! runner that records the command line and returns a canned result.

use std::future::Future;
use std::pin::Pin;

use crate::command::CommandLine;
use crate::errors::Result;

/// How the child's stdout/stderr are captured.
///
/// - `Stream`: echo each chunk to our own stdout/stderr as it arrives while
///   accumulating it.
/// - `Buffer`: accumulate silently and hand back the text at the end.
///
/// Both policies drain the two pipes concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePolicy {
    Stream,
    Buffer,
}

impl CapturePolicy {
    pub fn for_silent(silent: bool) -> Self {
        if silent {
            CapturePolicy::Buffer
        } else {
            CapturePolicy::Stream
        }
    }
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `-1` when the process was terminated by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Captured stdout followed by captured stderr.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// Trait abstracting how an assembled command line is executed.
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and capture its output under `policy`.
    ///
    /// A non-zero exit is *not* an error at this level; it is reported in
    /// [`ProcessOutput::code`] and judged by the caller.
    fn execute<'a>(
        &'a self,
        command: &'a CommandLine,
        policy: CapturePolicy,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>>;
}
