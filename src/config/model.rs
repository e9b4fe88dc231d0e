// src/config/model.rs

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "htdemucs";

/// Device used when the caller does not pick one.
pub const DEFAULT_DEVICE: &str = "cpu";

/// Name of the separation tool, both on the host and inside the image.
pub const DEFAULT_EXECUTABLE: &str = "demucs";

/// How the separation tool is launched.
///
/// - `Local`: run the executable directly on the host (default).
/// - `Docker`: run it inside a throwaway container, with the input's
///   directory bind-mounted into the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    Local,
    Docker,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Local
    }
}

/// Strategy the tool uses to avoid clipping in the written stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClipMode {
    Rescale,
    Clamp,
}

impl ClipMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipMode::Rescale => "rescale",
            ClipMode::Clamp => "clamp",
        }
    }
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full invocation settings for one separation run.
///
/// Build one with [`DemucsConfig::new`], which fills in the defaults, and
/// override fields with struct-update syntax:
///
/// ```
/// use vox_demucs::config::{DemucsConfig, Engine};
///
/// let cfg = DemucsConfig {
///     device: Some("cuda".to_string()),
///     engine: Engine::Docker,
///     ..DemucsConfig::new("song.mp3", "separated")
/// };
/// assert_eq!(cfg.name.as_deref(), Some("htdemucs"));
/// ```
///
/// Text options are only passed on when non-empty, numeric options whenever
/// they are set (zero included), switches only when `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemucsConfig {
    /// Audio file to separate. Must not be blank.
    pub input: PathBuf,
    /// Folder where extracted tracks are saved (`-o`).
    pub out: String,

    pub help: bool,
    /// Locally trained XP signature (`-s`).
    pub sig: Option<String>,
    /// Pretrained model name or signature (`-n`).
    pub name: Option<String>,
    /// Folder containing pre-trained models for use with `-n`.
    pub repo: Option<String>,
    pub verbose: bool,
    /// Output file name template, e.g. `{track}/{stem}.{ext}`.
    pub filename: Option<String>,
    pub device: Option<String>,
    /// Number of random shifts for equivariant stabilization.
    pub shifts: Option<u32>,
    /// Overlap between the splits.
    pub overlap: Option<f64>,
    pub no_split: bool,
    /// Split size of each chunk.
    pub segment: Option<u32>,
    /// Only separate into `{STEM}` and `no_{STEM}`.
    pub two_stems: Option<String>,
    pub int24: bool,
    pub float32: bool,
    pub clip_mode: Option<ClipMode>,
    pub flac: bool,
    pub mp3: bool,
    pub mp3_bitrate: Option<u32>,
    pub mp3_preset: Option<u8>,
    /// Number of concurrent jobs inside the tool.
    pub jobs: Option<u32>,

    /// Suppress the command trace and the live echo of the tool's output.
    pub silent: bool,
    pub engine: Engine,
    /// Container image for [`Engine::Docker`]; see [`crate::command::DEFAULT_IMAGE`].
    pub image: Option<String>,
    /// Container runtime binary for [`Engine::Docker`] (`docker`, `podman`, ...).
    pub container_runtime: Option<String>,
    /// Separation tool executable; defaults to [`DEFAULT_EXECUTABLE`].
    pub executable: Option<String>,
}

impl DemucsConfig {
    /// Create a configuration for `input` writing into `out`, with every
    /// other field at its default.
    pub fn new(input: impl Into<PathBuf>, out: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            out: out.into(),
            help: false,
            sig: None,
            name: Some(DEFAULT_MODEL.to_string()),
            repo: None,
            verbose: false,
            filename: None,
            device: Some(DEFAULT_DEVICE.to_string()),
            shifts: None,
            overlap: None,
            no_split: false,
            segment: None,
            two_stems: None,
            int24: false,
            float32: false,
            clip_mode: None,
            flac: false,
            mp3: false,
            mp3_bitrate: None,
            mp3_preset: None,
            jobs: None,
            silent: true,
            engine: Engine::default(),
            image: None,
            container_runtime: None,
            executable: None,
        }
    }

    /// True when the configured device is `cuda`.
    pub fn wants_gpu(&self) -> bool {
        self.device.as_deref() == Some("cuda")
    }

    pub fn executable(&self) -> &str {
        non_empty(self.executable.as_deref()).unwrap_or(DEFAULT_EXECUTABLE)
    }
}

/// `Some(s)` only when `s` is present and not the empty string.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
