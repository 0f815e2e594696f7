//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::params::{pitch_constants, PitchRange, SwatchConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "synesthesia")]
#[command(about = "Map a recording's dominant pitch to a color swatch", long_about = None)]
pub struct Args {
    /// WAV file to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Swatch PNG output path
    #[arg(long, short, value_name = "PATH", default_value = "swatch.png")]
    pub output: PathBuf,

    /// Swatch edge length (pixels)
    #[arg(long, value_name = "PX", default_value_t = 200)]
    pub size: u32,

    /// Lowest mapped MIDI pitch (hue 0)
    #[arg(long, value_name = "MIDI", default_value_t = pitch_constants::PIANO_LOW_MIDI)]
    pub min_midi: f64,

    /// Highest mapped MIDI pitch (hue 1)
    #[arg(long, value_name = "MIDI", default_value_t = pitch_constants::PIANO_HIGH_MIDI)]
    pub max_midi: f64,

    /// Only print the color, do not write a swatch
    #[arg(long)]
    pub no_swatch: bool,
}

impl Args {
    /// Pitch bounds from command-line arguments
    pub fn pitch_range(&self) -> Result<PitchRange> {
        PitchRange::new(self.min_midi, self.max_midi)
    }

    /// Swatch configuration, unless swatch output is disabled
    pub fn swatch_config(&self) -> Option<SwatchConfig> {
        (!self.no_swatch).then(|| SwatchConfig::new(self.size, self.output.clone()))
    }
}
