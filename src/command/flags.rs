// src/command/flags.rs

//! Ordered mapping from [`DemucsConfig`] fields to the tool's CLI flags.
//!
//! [`FLAG_TABLE`] is the single place where flag spelling and order live.
//! Each entry reads one field and reports whether (and with what value) the
//! flag should be emitted.

use std::fmt::Display;

use crate::config::model::{non_empty, DemucsConfig};

/// What a single table entry contributes to the argument vector.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Field unset, false or empty: emit nothing.
    Skip,
    /// Emit the bare flag.
    Switch,
    /// Emit the flag followed by this value.
    Value(String),
}

/// One row of the flag table.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub flag: &'static str,
    pub read: fn(&DemucsConfig) -> FlagValue,
}

pub const FLAG_TABLE: &[FlagSpec] = &[
    FlagSpec { flag: "--help", read: |c| switch(c.help) },
    FlagSpec { flag: "-s", read: |c| text(c.sig.as_deref()) },
    FlagSpec { flag: "-n", read: |c| text(c.name.as_deref()) },
    FlagSpec { flag: "--repo", read: |c| text(c.repo.as_deref()) },
    FlagSpec { flag: "-v", read: |c| switch(c.verbose) },
    FlagSpec { flag: "-o", read: |c| text(Some(c.out.as_str())) },
    FlagSpec { flag: "--filename", read: |c| text(c.filename.as_deref()) },
    FlagSpec { flag: "-d", read: |c| text(c.device.as_deref()) },
    FlagSpec { flag: "--shifts", read: |c| shown(c.shifts) },
    FlagSpec { flag: "--overlap", read: |c| shown(c.overlap) },
    FlagSpec { flag: "--no-split", read: |c| switch(c.no_split) },
    FlagSpec { flag: "--segment", read: |c| shown(c.segment) },
    FlagSpec { flag: "--two-stems", read: |c| text(c.two_stems.as_deref()) },
    FlagSpec { flag: "--int24", read: |c| switch(c.int24) },
    FlagSpec { flag: "--float32", read: |c| switch(c.float32) },
    FlagSpec { flag: "--clip-mode", read: |c| shown(c.clip_mode) },
    FlagSpec { flag: "--flac", read: |c| switch(c.flac) },
    FlagSpec { flag: "--mp3", read: |c| switch(c.mp3) },
    FlagSpec { flag: "--mp3-bitrate", read: |c| shown(c.mp3_bitrate) },
    FlagSpec { flag: "--mp3-preset", read: |c| shown(c.mp3_preset) },
    FlagSpec { flag: "-j", read: |c| shown(c.jobs) },
];

fn switch(on: bool) -> FlagValue {
    if on { FlagValue::Switch } else { FlagValue::Skip }
}

fn text(value: Option<&str>) -> FlagValue {
    match non_empty(value) {
        Some(s) => FlagValue::Value(s.to_string()),
        None => FlagValue::Skip,
    }
}

fn shown<T: Display>(value: Option<T>) -> FlagValue {
    match value {
        Some(v) => FlagValue::Value(v.to_string()),
        None => FlagValue::Skip,
    }
}

/// Walk [`FLAG_TABLE`] in order and collect the emitted flags.
///
/// The input track is *not* included; callers append it last.
pub fn collect_flags(cfg: &DemucsConfig) -> Vec<String> {
    let mut args = Vec::new();
    for spec in FLAG_TABLE {
        match (spec.read)(cfg) {
            FlagValue::Skip => {}
            FlagValue::Switch => args.push(spec.flag.to_string()),
            FlagValue::Value(v) => {
                args.push(spec.flag.to_string());
                args.push(v);
            }
        }
    }
    args
}
