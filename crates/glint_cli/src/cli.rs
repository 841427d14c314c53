use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line
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

/// Built-in demo scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneName {
    /// Diffuse and metallic spheres over a reflective floor
    Spheres,
    /// Two facing mirrors with a sphere between them
    Mirrors,
    /// One of each primitive: sphere, cylinder, cone and plane
    Shapes,
    /// Checkerboard textures, plus an image sprite when --texture is given
    Textured,
    /// An OBJ mesh loaded from --mesh
    Mesh,
}

/// Command line arguments
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style CPU ray tracer")]
pub struct Args {
    /// Demo scene to render
    #[arg(long, value_enum, default_value = "spheres")]
    pub scene: SceneName,

    /// JSON render config; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum number of mirror bounces per primary ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Image file for the textured scene's sprite
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// OBJ file for the mesh scene
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
