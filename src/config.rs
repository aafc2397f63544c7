// Command-line flags and the resolved run configuration.
use crate::error::Error;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const FOREGROUND_FILE: &str = "ic_launcher_foreground.png";
pub const BACKGROUND_FILE: &str = "ic_launcher_background.png";
pub const DEFAULT_CROP_RATIO: f64 = 0.20; // Android keeps ~25% padding; leave a little for corner rounding

#[derive(Debug, Parser)]
#[command(
    name = "adaptive-iconset",
    about = "Turn Android adaptive-icon layers into an iOS/macOS AppIcon set"
)]
pub struct Args {
    /// Android mipmap directory holding ic_launcher_foreground.png and ic_launcher_background.png.
    #[arg(value_name = "RES_DIR")]
    pub res_dir: Option<PathBuf>,

    /// Foreground layer (overrides RES_DIR).
    #[arg(short, long, value_name = "PNG")]
    pub foreground: Option<PathBuf>,

    /// Background layer (overrides RES_DIR).
    #[arg(short, long, value_name = "PNG")]
    pub background: Option<PathBuf>,

    /// Existing output directory, usually Assets.xcassets/AppIcon.appiconset.
    #[arg(short, long, value_name = "DIR", default_value = "AppIcon.appiconset")]
    pub output: PathBuf,

    /// Fraction of the composite's side trimmed from each edge.
    #[arg(long, value_name = "RATIO", default_value_t = DEFAULT_CROP_RATIO)]
    pub crop_ratio: f64,
}

/// Everything one run needs; plain data so callers can build it directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub foreground_path: PathBuf,
    pub background_path: PathBuf,
    pub output_dir: PathBuf,
    pub crop_ratio: f64,
}

impl Config {
    /// Fill in layer paths from RES_DIR where no explicit path was given, then validate.
    pub fn resolve(args: Args) -> Result<Self, Error> {
        let foreground_path = layer_path(args.foreground, args.res_dir.as_deref(), FOREGROUND_FILE)?;
        let background_path = layer_path(args.background, args.res_dir.as_deref(), BACKGROUND_FILE)?;

        let config = Config {
            foreground_path,
            background_path,
            output_dir: args.output,
            crop_ratio: args.crop_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Crop ratio must leave a non-empty square: 0.0 <= r < 0.5.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.crop_ratio.is_finite() || !(0.0..0.5).contains(&self.crop_ratio) {
            return Err(Error::Config(format!(
                "crop ratio must be in [0.0, 0.5), got {}",
                self.crop_ratio
            )));
        }
        Ok(())
    }
}

fn layer_path(explicit: Option<PathBuf>, res_dir: Option<&Path>, file: &str) -> Result<PathBuf, Error> {
    match (explicit, res_dir) {
        (Some(path), _) => Ok(path),
        (None, Some(dir)) => Ok(dir.join(file)),
        (None, None) => Err(Error::Config(format!(
            "no path for {file}: pass RES_DIR or the matching --foreground/--background flag"
        ))),
    }
}
