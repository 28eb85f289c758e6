use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{RenderConfig, DEFAULT_BUCKET_SIZE, DEFAULT_MAX_DEPTH};
use log::LevelFilter;

/// Log levels accepted on the command line
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A recursive whitted-style ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// JSON scene description; renders the built-in scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output file (.png or .ppm)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Number of times to render the scene, timing each pass
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub passes: u32,

    /// Reflection bounces before the grey fallback
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Bucket edge length for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub bucket_size: u32,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Render on a single thread in row-major order
    #[arg(long)]
    pub sequential: bool,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            bucket_size: self.bucket_size,
            threads: self.threads,
            parallel: !self.sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        assert_eq!(args.width, 256);
        assert_eq!(args.height, 256);
        assert_eq!(args.passes, 1);
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert!(args.scene.is_none());

        let config = args.render_config();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.bucket_size, 64);
        assert!(config.parallel);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "glint",
            "--width",
            "64",
            "--height",
            "32",
            "--passes",
            "6",
            "--sequential",
            "--threads",
            "2",
            "--max-depth",
            "8",
            "--log-level",
            "debug",
            "-o",
            "frame.ppm",
        ]);
        assert_eq!((args.width, args.height), (64, 32));
        assert_eq!(args.passes, 6);
        assert_eq!(args.log_level, LogLevel::Debug);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);

        let config = args.render_config();
        assert!(!config.parallel);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(Args::try_parse_from(["glint", "--width", "0"]).is_err());
    }

    #[test]
    fn test_args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
