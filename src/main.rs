// What you GET:
// • Reads the Android adaptive-icon layers (foreground + background PNG).
// • Pastes the foreground over the background, trims the safe-zone padding.
// • Writes AppIcon.png (1024x1024) and the ten macOS icon_*.png sizes.
// • RUST_LOG=debug shows crop rectangles and per-file timings on stderr.

mod config;
mod crop;
mod error;
mod layers;
mod render;
mod sizes;
mod types;

use clap::Parser;
use config::{Args, Config};
use error::Error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}"); // reported once, then a non-zero exit
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::resolve(Args::parse())?;
    log::debug!("{config:?}");

    render::generate(&config)?;
    Ok(())
}
