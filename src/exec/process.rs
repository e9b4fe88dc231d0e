// src/exec/process.rs

//! Tokio-backed runner that spawns real OS processes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::anyhow;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::command::CommandLine;
use crate::errors::{DemucsError, Result};
use crate::exec::runner::{CapturePolicy, CommandRunner, ProcessOutput};

const CHUNK_SIZE: usize = 8 * 1024;

/// Default [`CommandRunner`]: spawns `command.program` directly (no shell)
/// with stdout/stderr piped and stdin closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn execute<'a>(
        &'a self,
        command: &'a CommandLine,
        policy: CapturePolicy,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(run_process(command, policy))
    }
}

/// Spawn `command`, capture both output channels under `policy` and wait for
/// it to exit.
pub async fn run_process(command: &CommandLine, policy: CapturePolicy) -> Result<ProcessOutput> {
    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|source| DemucsError::Spawn {
        program: command.program.clone(),
        source,
    })?;

    debug!(program = %command.program, pid = child.id(), ?policy, "process started");

    let (code, stdout, stderr) = match policy {
        CapturePolicy::Buffer => buffer_output(child).await?,
        CapturePolicy::Stream => {
            stream_output(child, tokio::io::stdout(), tokio::io::stderr()).await?
        }
    };

    debug!(program = %command.program, exit_code = code, "process exited");

    Ok(ProcessOutput {
        code,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

type RawOutput = (i32, Vec<u8>, Vec<u8>);

async fn buffer_output(child: Child) -> Result<RawOutput> {
    // `wait_with_output` reads both pipes concurrently with the exit wait.
    let output = child.wait_with_output().await?;
    Ok((output.status.code().unwrap_or(-1), output.stdout, output.stderr))
}

/// Drain both pipes concurrently, echoing stdout chunks to `out_echo` and
/// stderr chunks to `err_echo`, while waiting for the child to exit.
async fn stream_output<O, E>(mut child: Child, out_echo: O, err_echo: E) -> Result<RawOutput>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("child stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("child stderr was not piped"))?;

    let (out, err, status) = tokio::join!(
        pump(stdout, out_echo, "stdout"),
        pump(stderr, err_echo, "stderr"),
        child.wait(),
    );

    let status = status?;
    Ok((status.code().unwrap_or(-1), out?, err?))
}

/// Read `reader` to EOF, echoing every chunk to `echo` as it arrives.
///
/// If the echo target stops accepting writes the pipe is still drained so the
/// child never blocks on a full buffer; only the echo is dropped.
async fn pump<R, W>(mut reader: R, echo: W, channel: &'static str) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut echo = Some(echo);
    let mut captured = Vec::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        captured.extend_from_slice(&chunk[..n]);

        if let Some(out) = echo.as_mut() {
            let written = match out.write_all(&chunk[..n]).await {
                Ok(()) => out.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                warn!(channel, error = %e, "echo failed; continuing to capture without echo");
                echo = None;
            }
        }
    }

    Ok(captured)
}
