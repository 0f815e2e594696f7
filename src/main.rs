//! Synesthesia - see the color of a sound
//!
//! Finds the dominant frequency of a recording, places its pitch on the
//! piano keyboard and paints the matching hue as a swatch.

use anyhow::{Context, Result};
use clap::Parser;

use synesthesia::cli::Args;
use synesthesia::rendering::save_swatch;
use synesthesia::sound_to_color;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let range = args.pitch_range().context("Invalid pitch range")?;

    let color = sound_to_color(&args.input, &range)
        .with_context(|| format!("Failed to map {} to a color", args.input.display()))?;

    println!("Color: {} {}", color, color.to_hex());

    if let Some(swatch) = args.swatch_config() {
        save_swatch(color, &swatch).context("Failed to render swatch")?;
        println!("Swatch: {}", swatch.output_path.display());
    }

    Ok(())
}
