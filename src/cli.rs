use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Renders a scene of spheres, planes and triangles to a BMP file")]
pub struct Args {
    /// TOML scene file; renders the built-in demo scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    #[arg(short, long, default_value = "scene.bmp")]
    pub output: PathBuf,

    /// Image width in pixels, overrides the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels, overrides the scene file
    #[arg(long)]
    pub height: Option<u32>,

    /// Anti-aliasing grid size per axis (1 disables anti-aliasing)
    #[arg(long)]
    pub aa_depth: Option<u32>,

    /// Maximum number of reflection bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}
