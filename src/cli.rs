// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag maps onto one [`DemucsConfig`] field; the tool's own `--help`
//! is exposed as `--tool-help` since `--help` belongs to this binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ClipMode, DemucsConfig, Engine};

/// Command-line arguments for `vox-demucs`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vox-demucs",
    version,
    about = "Run Demucs source separation locally or inside a container.",
    long_about = None
)]
pub struct CliArgs {
    /// Audio file to separate.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Folder where extracted tracks are saved.
    #[arg(short, long, value_name = "DIR")]
    pub out: String,

    /// Pass `--help` through to demucs.
    #[arg(long)]
    pub tool_help: bool,

    /// Locally trained XP signature.
    #[arg(short, long, value_name = "SIG")]
    pub sig: Option<String>,

    /// Pretrained model name or signature (default: htdemucs).
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Folder containing all pre-trained models for use with `--name`.
    #[arg(long, value_name = "DIR")]
    pub repo: Option<String>,

    /// Ask demucs for verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file name template, e.g. "{track}/{stem}.{ext}".
    #[arg(long, value_name = "TEMPLATE")]
    pub filename: Option<String>,

    /// Device to use (default: cpu).
    #[arg(short, long, value_name = "DEVICE")]
    pub device: Option<String>,

    #[arg(long, value_name = "N")]
    pub shifts: Option<u32>,

    #[arg(long, value_name = "FRACTION")]
    pub overlap: Option<f64>,

    /// Do not split audio in chunks.
    #[arg(long)]
    pub no_split: bool,

    #[arg(long, value_name = "N")]
    pub segment: Option<u32>,

    /// Only separate audio into STEM and no_STEM.
    #[arg(long, value_name = "STEM")]
    pub two_stems: Option<String>,

    #[arg(long)]
    pub int24: bool,

    #[arg(long)]
    pub float32: bool,

    #[arg(long, value_enum, value_name = "MODE")]
    pub clip_mode: Option<ClipMode>,

    #[arg(long)]
    pub flac: bool,

    #[arg(long)]
    pub mp3: bool,

    #[arg(long, value_name = "KBPS")]
    pub mp3_bitrate: Option<u32>,

    /// Encoder preset for MP3 conversion (2 = best quality, 7 = fastest).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(2..=7))]
    pub mp3_preset: Option<u8>,

    /// Number of concurrent jobs inside demucs.
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<u32>,

    /// Where to run demucs.
    #[arg(long, value_enum, default_value_t = Engine::Local)]
    pub engine: Engine,

    /// Container image for `--engine docker`.
    #[arg(long, value_name = "IMAGE")]
    pub image: Option<String>,

    /// Container runtime binary for `--engine docker` (docker, podman, ...).
    #[arg(long, value_name = "BIN")]
    pub runtime: Option<String>,

    /// Demucs executable name or path.
    #[arg(long, value_name = "BIN")]
    pub executable: Option<String>,

    /// Log the command and echo demucs output live instead of printing it at the end.
    #[arg(long)]
    pub stream: bool,

    /// Print the assembled command line, but don't execute it.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `VOX_DEMUCS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Overlay the parsed flags on the default configuration.
    pub fn to_config(&self) -> DemucsConfig {
        let mut cfg = DemucsConfig::new(self.input.clone(), self.out.clone());

        if self.name.is_some() {
            cfg.name = self.name.clone();
        }
        if self.device.is_some() {
            cfg.device = self.device.clone();
        }

        DemucsConfig {
            help: self.tool_help,
            sig: self.sig.clone(),
            repo: self.repo.clone(),
            verbose: self.verbose,
            filename: self.filename.clone(),
            shifts: self.shifts,
            overlap: self.overlap,
            no_split: self.no_split,
            segment: self.segment,
            two_stems: self.two_stems.clone(),
            int24: self.int24,
            float32: self.float32,
            clip_mode: self.clip_mode,
            flac: self.flac,
            mp3: self.mp3,
            mp3_bitrate: self.mp3_bitrate,
            mp3_preset: self.mp3_preset,
            jobs: self.jobs,
            silent: !self.stream,
            engine: self.engine,
            image: self.image.clone(),
            container_runtime: self.runtime.clone(),
            executable: self.executable.clone(),
            ..cfg
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
