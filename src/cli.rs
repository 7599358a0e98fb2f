use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::backends::OutputFormat;
use crate::logging::LogLevel;
use crate::metric::Metric;
use crate::pipeline::anchors::Scheme;
use crate::pipeline::assemble::ThemeRequest;
use crate::space::ColorSpace;

/// Generate 16-color terminal themes from images.
#[derive(Parser, Debug)]
#[command(name = "snaptheme", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Color space to cluster in
    #[arg(short, long, value_enum, default_value_t = ColorSpace::Hsl)]
    pub space: ColorSpace,

    /// Anchor palette that seeds the clusters
    #[arg(short = 'm', long, value_enum, default_value_t = Scheme::Dark)]
    pub scheme: Scheme,

    /// Distance between colors while clustering (ciede2000 needs --space lab)
    #[arg(short = 'd', long, value_enum, default_value_t = Metric::Euclidean)]
    pub metric: Metric,

    /// Maximum number of clustering passes
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write theme to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long, conflicts_with_all = ["output", "preview"])]
    pub tui: bool,

    /// Diagnostic verbosity (RUST_LOG overrides)
    #[arg(long, value_enum, env = "SNAPTHEME_LOG", default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,
}

impl Args {
    /// The clustering parameters these arguments describe.
    pub fn request(&self) -> Result<ThemeRequest> {
        if !self.metric.supports(self.space) {
            bail!(
                "metric {} is not supported in the {} color space",
                self.metric,
                self.space
            );
        }
        Ok(ThemeRequest {
            space: self.space,
            scheme: self.scheme,
            metric: self.metric,
            max_iterations: self.iterations as usize,
        })
    }
}
