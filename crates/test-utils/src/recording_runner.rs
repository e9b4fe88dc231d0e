use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use vox_demucs::command::CommandLine;
use vox_demucs::errors::Result;
use vox_demucs::exec::{CapturePolicy, CommandRunner, ProcessOutput};

/// A fake runner that:
/// - records every command line it is asked to run, with its capture policy
/// - never spawns anything
/// - answers with a canned `ProcessOutput`, or by default with the command
///   line itself on stdout and exit code 0.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<(CommandLine, CapturePolicy)>>>,
    response: Option<ProcessOutput>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(output: ProcessOutput) -> Self {
        Self {
            calls: Arc::default(),
            response: Some(output),
        }
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::with_output(ProcessOutput {
            code,
            stdout: "partial stdout\n".to_string(),
            stderr: stderr.to_string(),
        })
    }

    pub fn calls(&self) -> Vec<(CommandLine, CapturePolicy)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_command(&self) -> Option<CommandLine> {
        self.calls().pop().map(|(cmd, _)| cmd)
    }
}

impl CommandRunner for RecordingRunner {
    fn execute<'a>(
        &'a self,
        command: &'a CommandLine,
        policy: CapturePolicy,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push((command.clone(), policy));

            Ok(self.response.clone().unwrap_or_else(|| ProcessOutput {
                code: 0,
                stdout: command.to_string(),
                stderr: String::new(),
            }))
        })
    }
}
