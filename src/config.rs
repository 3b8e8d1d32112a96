use crate::error::Error;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BG: (u8, u8, u8) = (2, 4, 10);

/// Particle fireworks in the terminal.
///
/// Press 'q', ESC, or Ctrl+C to exit.
#[derive(Debug, Parser)]
#[command(name = "skyburst", version)]
pub struct Args {
    /// Smaller bursts, no rings, and a slower launch cadence
    #[arg(long, env = "SKYBURST_REDUCED_MOTION")]
    pub reduced_motion: bool,

    /// Seed for the show; the same seed and terminal size replay the same show
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logical units per terminal pixel (each cell is two pixels tall)
    #[arg(long, default_value_t = 8.0, value_parser = parse_scale)]
    pub scale: f32,

    /// Background color as hex, e.g. 1a1b26
    #[arg(long, value_name = "RRGGBB", value_parser = parse_hex_color)]
    pub bg_color: Option<(u8, u8, u8)>,

    /// Cap on presented frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn background(&self) -> (u8, u8, u8) {
        self.bg_color.unwrap_or(DEFAULT_BG)
    }

    /// Log filter used when `RUST_LOG` is unset. Stderr shares the terminal
    /// with the frames, so nothing is logged there unless asked for.
    pub fn default_log_filter(&self) -> &'static str {
        if self.log_file.is_some() { "info" } else { "off" }
    }
}

pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), Error> {
    let digits = hex.trim_start_matches('#');
    let invalid = || Error::InvalidColor(hex.to_string());
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if !(1.0..=32.0).contains(&scale) {
        return Err(format!("scale must be between 1 and 32, got {scale}"));
    }
    Ok(scale)
}
