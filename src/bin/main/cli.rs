use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use readily_core::{
    app::{ReaderConfig, UnitMode},
    content::DecodePolicy,
};

#[derive(Debug, Parser)]
#[command(
    name = "readily",
    about = "Speed-read stdin one word at a time",
    version
)]
pub struct Cli {
    /// Starting rate in units per minute
    #[arg(short, long, default_value_t = 300)]
    pub wpm: u32,

    /// How text is split into units
    #[arg(short, long, value_enum, default_value_t = ModeArg::Auto)]
    pub mode: ModeArg,

    /// Start with surrounding text shown around the current unit
    #[arg(short, long)]
    pub context: bool,

    /// Replace invalid UTF-8 with U+FFFD instead of refusing the input
    #[arg(long)]
    pub lossy: bool,

    /// Input polls per second while a unit is on screen
    #[arg(long, default_value_t = 60)]
    pub tick_hz: u32,

    /// Write debug logs here (filtered by RUST_LOG)
    #[arg(long, env = "READILY_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Auto,
    Words,
    Characters,
}

impl Cli {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            rate: self.wpm,
            unit_mode: match self.mode {
                ModeArg::Auto => UnitMode::Auto,
                ModeArg::Words => UnitMode::Words,
                ModeArg::Characters => UnitMode::Characters,
            },
            context: self.context,
            tick_hz: self.tick_hz,
            ..ReaderConfig::default()
        }
    }

    pub fn decode_policy(&self) -> DecodePolicy {
        if self.lossy {
            DecodePolicy::Lossy
        } else {
            DecodePolicy::Strict
        }
    }
}
