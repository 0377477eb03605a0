use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::LightingMode;
use std::path::PathBuf;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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

/// Built-in demo scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Lambert box, Cook-Torrance spheres and one triangle per cull mode
    Reference,
    /// Solid color spheres and planes
    Spheres,
    /// A mesh loaded from `--obj`
    Mesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LightingArg {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<LightingArg> for LightingMode {
    fn from(arg: LightingArg) -> Self {
        match arg {
            LightingArg::ObservedArea => LightingMode::ObservedArea,
            LightingArg::Radiance => LightingMode::Radiance,
            LightingArg::Brdf => LightingMode::Brdf,
            LightingArg::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A CPU ray tracer with direct lighting and hard shadows")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value = "reference")]
    pub scene: SceneKind,

    /// OBJ file for the mesh scene
    #[arg(long, required_if_eq("scene", "mesh"))]
    pub obj: Option<PathBuf>,

    /// JSON render config; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lighting mode override
    #[arg(long, value_enum)]
    pub lighting: Option<LightingArg>,

    /// Disable shadow rays
    #[arg(long)]
    pub no_shadows: bool,

    /// Number of animation frames to render
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Scene time between frames, in seconds
    #[arg(long, default_value = "0.1")]
    pub frame_step: f32,

    /// Output PNG path; frame numbers are appended when rendering more than one
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Logging level, overridden by RUST_LOG
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
