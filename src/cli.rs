//! Command-line options.
//!
//! Every option is a single `--key=value` token. Tokens of any other shape
//! are set aside before clap sees them so one typo does not cost the run.

use crate::config::{Pairing, PlotConfig, PlotKind};
use crate::error::{PlotError, Result};
use crate::logging::DEFAULT_LEVEL;
use crate::numeric::check_resolution;
use crate::render::check_canvas;
use crate::util::colors::DEFAULT_SEED;
use crate::util::ColorPalette;
use clap::Parser;
use std::path::PathBuf;

/// Tokens handed to clap unchanged.
const PASSTHROUGH: [&str; 4] = ["--help", "-h", "--version", "-V"];

/// Command-line tokens split into the ones clap should parse and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Program name followed by the accepted tokens.
    pub kept: Vec<String>,
    /// Tokens that were not `--key=value`.
    pub skipped: Vec<String>,
}

/// Keep the program name, the help/version switches and every token with
/// exactly one `=`.
pub fn split_tokens<I, T>(args: I) -> Tokens
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut tokens = Tokens {
        kept: args.next().into_iter().collect(),
        skipped: Vec::new(),
    };
    for token in args {
        if PASSTHROUGH.contains(&token.as_str()) || token.matches('=').count() == 1 {
            tokens.kept.push(token);
        } else {
            tokens.skipped.push(token);
        }
    }
    tokens
}

/// Plot CSV columns as scatter, line or density charts.
#[derive(Parser, Debug)]
#[command(name = "csvplot", version)]
#[command(about = "Plot CSV columns as scatter, line or density charts", long_about = None)]
pub struct Args {
    /// CSV file whose first row names the columns
    #[arg(long)]
    pub data: PathBuf,

    /// Plot type
    #[arg(long = "type", value_enum)]
    pub kind: PlotKind,

    /// Write the plot to this PNG file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Blur passes (default 32 for density plots, 0 for line plots)
    #[arg(long, visible_alias = "size")]
    pub blur_size: Option<i64>,

    /// Samples inserted between neighbouring points of a line
    #[arg(long, default_value_t = 0)]
    pub middle_points: i64,

    /// Density grid cells per side
    #[arg(long, default_value_t = 256)]
    pub resolution: i64,

    /// Scatter column pairing
    #[arg(long, value_enum, default_value_t = Pairing::Interleaved)]
    pub pairing: Pairing,

    /// Density colour ramp
    #[arg(long, value_enum, ignore_case = true, default_value_t = ColorPalette::Viridis)]
    pub palette: ColorPalette,

    /// Seed for series colours
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Write densified line samples to this CSV file
    #[arg(long)]
    pub preprocessed: Option<PathBuf>,

    /// Show the plot in the terminal (default: only without --output)
    #[arg(long)]
    pub show: Option<bool>,

    /// Enable logging to specified file
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Log level or filter directive
    #[arg(long, default_value = DEFAULT_LEVEL)]
    pub log_level: String,
}

impl Args {
    /// Validate the numeric options and resolve defaults.
    pub fn into_config(self) -> Result<PlotConfig> {
        let blur_size = match self.blur_size {
            Some(n) => non_negative("blur-size", n)?,
            None => self.kind.default_blur_size(),
        };
        let middle_points = non_negative("middle-points", self.middle_points)?;
        let resolution = non_negative("resolution", self.resolution)?;
        check_resolution(resolution)?;
        check_canvas(self.width, self.height)?;

        let mut config = PlotConfig::new(self.kind, self.data);
        config.show = self.show.unwrap_or(self.output.is_none());
        config.output = self.output;
        config.preprocessed = self.preprocessed;
        config.blur_size = blur_size;
        config.middle_points = middle_points;
        config.resolution = resolution;
        config.pairing = self.pairing;
        config.palette = self.palette;
        config.seed = self.seed;
        config.width = self.width;
        config.height = self.height;
        Ok(config)
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        PlotError::invalid_parameter(name, format!("must not be negative, got {}", value))
    })
}
