//! HSV to RGB conversion and frequency-to-color mapping.

use std::fmt;

use crate::error::Result;
use crate::params::PitchRange;
use crate::pitch::{frequency_to_midi, midi_to_hue};

/// Full saturation
pub const SATURATION: f64 = 1.0;

/// Full brightness
pub const VALUE: f64 = 1.0;

/// RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Quantise to 8 bits per channel
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

/// Convert HSV to RGB
/// - h: hue in turns (0 and 1 are both red)
/// - s: saturation (0-1)
/// - v: value/brightness (0-1)
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    if s <= 0.0 {
        return Rgb::new(v, v, v);
    }

    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Every intermediate value of one frequency-to-color mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTrace {
    pub frequency_hz: f64,
    pub midi: f64,
    pub hue: f64,
    pub color: Rgb,
}

impl fmt::Display for ColorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frequency: {:.3} Hz, MIDI note: {:.3}, Hue: {:.4}, Color: {}",
            self.frequency_hz, self.midi, self.hue, self.color
        )
    }
}

/// Map a frequency to a fully saturated, full-brightness color
pub fn frequency_to_color(frequency_hz: f64, range: &PitchRange) -> Result<ColorTrace> {
    let midi = frequency_to_midi(frequency_hz)?;
    let hue = midi_to_hue(midi, range);
    let color = hsv_to_rgb(hue, SATURATION, VALUE);

    Ok(ColorTrace {
        frequency_hz,
        midi,
        hue,
        color,
    })
}
