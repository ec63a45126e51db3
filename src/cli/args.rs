use clap::Parser;
use std::path::PathBuf;

use favicrop::{IconStrategy, ResizeFilter};

#[derive(Parser, Debug)]
#[command(name = "favicrop", version, about = "Crop a logo's icon mark into a square favicon")]
pub struct CliArgs {
    /// Source logo image
    #[arg(short, long, default_value = "src/assets/logo.png")]
    pub input: PathBuf,

    /// Output favicon (.png, or .ico for a multi-size icon)
    #[arg(short, long, default_value = "public/favicon.png")]
    pub output: PathBuf,

    /// Output side in pixels (default 64)
    #[arg(short, long)]
    pub size: Option<String>,

    /// How to isolate the icon from the wordmark (left-square, gap, whole)
    #[arg(long, value_enum)]
    pub strategy: Option<IconStrategy>,

    /// Resampling filter (nearest, bilinear, catmull-rom, mitchell, lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Pixels with alpha at or below this value count as background
    #[arg(long)]
    pub alpha_threshold: Option<u8>,

    /// Minimum run of transparent columns separating icon and text (gap strategy)
    #[arg(long)]
    pub gap_columns: Option<u32>,

    /// Frame sizes for ICO output, comma separated (e.g. 16,32,48)
    #[arg(long, value_delimiter = ',')]
    pub ico_sizes: Vec<u32>,

    /// Pad the icon to a centered transparent square instead of stretching it
    #[arg(long, default_value_t = false)]
    pub pad: bool,

    /// Stretch the icon to the output square even if the config file enables padding
    #[arg(long, default_value_t = false, conflicts_with = "pad")]
    pub no_pad: bool,

    /// JSON file with favicon parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report next to the output (<output>.json)
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
