// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`runner`] provides the `CommandRunner` trait, the capture policies and
//!   the `ProcessOutput` record.
//! - [`process`] provides `ProcessRunner`, the production implementation on
//!   top of `tokio::process::Command`.

pub mod process;
pub mod runner;

pub use process::{run_process, ProcessRunner};
pub use runner::{CapturePolicy, CommandRunner, ProcessOutput};
