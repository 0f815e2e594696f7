//! Swatch rendering configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Swatch output configuration
#[derive(Debug, Clone)]
pub struct SwatchConfig {
    /// Edge length of the square swatch (pixels)
    /// 200 = a 2 inch square at 100 dpi
    pub size_px: u32,

    /// PNG output path
    pub output_path: PathBuf,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            size_px: 200,
            output_path: PathBuf::from("swatch.png"),
        }
    }
}

impl SwatchConfig {
    pub fn new(size_px: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size_px,
            output_path: output_path.into(),
        }
    }

    /// Total number of pixels in the swatch
    pub fn pixel_count(&self) -> usize {
        self.size_px as usize * self.size_px as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.size_px == 0 {
            return Err(Error::Config("Swatch size must be > 0".to_string()));
        }
        Ok(())
    }
}
