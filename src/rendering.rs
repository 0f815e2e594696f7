//! Static swatch rendering.
//!
//! Paints a single color into a square image and writes it as PNG.

use image::{ImageFormat, Rgb as Pixel, RgbImage};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::params::SwatchConfig;

/// Build a solid swatch of `color`
pub fn render_swatch(color: Rgb, config: &SwatchConfig) -> Result<RgbImage> {
    config.validate()?;
    log::debug!(
        "Painting {} pixels with {}",
        config.pixel_count(),
        color.to_hex()
    );
    Ok(RgbImage::from_pixel(
        config.size_px,
        config.size_px,
        Pixel(color.to_rgb8()),
    ))
}

/// Render `color` and save it as PNG at `config.output_path`
pub fn save_swatch(color: Rgb, config: &SwatchConfig) -> Result<()> {
    let img = render_swatch(color, config)?;

    img.save_with_format(&config.output_path, ImageFormat::Png)
        .map_err(|e| {
            Error::Render(format!(
                "failed to save swatch {}: {}",
                config.output_path.display(),
                e
            ))
        })?;

    log::debug!(
        "Swatch {} ({}x{}) written to {}",
        color.to_hex(),
        config.size_px,
        config.size_px,
        config.output_path.display()
    );
    Ok(())
}
