#![allow(dead_code)]

use std::path::PathBuf;

use vox_demucs::config::{ClipMode, DemucsConfig, Engine};

/// Builder for `DemucsConfig` to simplify test setup.
///
/// Starts from `DemucsConfig::new`, so every unset field keeps its default.
pub struct DemucsConfigBuilder {
    config: DemucsConfig,
}

impl DemucsConfigBuilder {
    pub fn new(input: impl Into<PathBuf>, out: &str) -> Self {
        Self {
            config: DemucsConfig::new(input, out),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.name = Some(name.to_string());
        self
    }

    pub fn sig(mut self, sig: &str) -> Self {
        self.config.sig = Some(sig.to_string());
        self
    }

    pub fn repo(mut self, repo: &str) -> Self {
        self.config.repo = Some(repo.to_string());
        self
    }

    pub fn device(mut self, device: &str) -> Self {
        self.config.device = Some(device.to_string());
        self
    }

    pub fn filename(mut self, template: &str) -> Self {
        self.config.filename = Some(template.to_string());
        self
    }

    pub fn two_stems(mut self, stem: &str) -> Self {
        self.config.two_stems = Some(stem.to_string());
        self
    }

    pub fn shifts(mut self, n: u32) -> Self {
        self.config.shifts = Some(n);
        self
    }

    pub fn overlap(mut self, f: f64) -> Self {
        self.config.overlap = Some(f);
        self
    }

    pub fn segment(mut self, n: u32) -> Self {
        self.config.segment = Some(n);
        self
    }

    pub fn clip_mode(mut self, mode: ClipMode) -> Self {
        self.config.clip_mode = Some(mode);
        self
    }

    pub fn mp3(mut self, bitrate: Option<u32>, preset: Option<u8>) -> Self {
        self.config.mp3 = true;
        self.config.mp3_bitrate = bitrate;
        self.config.mp3_preset = preset;
        self
    }

    pub fn jobs(mut self, n: u32) -> Self {
        self.config.jobs = Some(n);
        self
    }

    pub fn every_switch(mut self) -> Self {
        self.config.help = true;
        self.config.verbose = true;
        self.config.no_split = true;
        self.config.int24 = true;
        self.config.float32 = true;
        self.config.flac = true;
        self.config.mp3 = true;
        self
    }

    pub fn silent(mut self, val: bool) -> Self {
        self.config.silent = val;
        self
    }

    pub fn docker(mut self) -> Self {
        self.config.engine = Engine::Docker;
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.config.image = Some(image.to_string());
        self
    }

    pub fn container_runtime(mut self, runtime: &str) -> Self {
        self.config.container_runtime = Some(runtime.to_string());
        self
    }

    pub fn executable(mut self, exe: impl Into<String>) -> Self {
        self.config.executable = Some(exe.into());
        self
    }

    pub fn build(self) -> DemucsConfig {
        self.config
    }
}
