//! Pitch mapping configuration and constants.

use crate::error::{Error, Result};

/// MIDI bounds used to linearise pitch into a hue
///
/// Pitches are clamped into `[min_midi, max_midi]` before rescaling, so
/// anything below the lower bound is red (hue 0) and anything above the
/// upper bound wraps back to red (hue 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchRange {
    /// Lowest mapped pitch (MIDI note number)
    /// Default: 21 = A0, lowest piano key
    pub min_midi: f64,

    /// Highest mapped pitch (MIDI note number)
    /// Default: 108 = C8, highest piano key
    pub max_midi: f64,
}

impl Default for PitchRange {
    fn default() -> Self {
        Self {
            min_midi: pitch_constants::PIANO_LOW_MIDI,
            max_midi: pitch_constants::PIANO_HIGH_MIDI,
        }
    }
}

impl PitchRange {
    /// Create a validated range
    pub fn new(min_midi: f64, max_midi: f64) -> Result<Self> {
        let range = Self { min_midi, max_midi };
        range.validate()?;
        Ok(range)
    }

    /// Width of the range in semitones
    pub fn span(&self) -> f64 {
        self.max_midi - self.min_midi
    }

    /// Validate configuration (finite bounds, max > min)
    pub fn validate(&self) -> Result<()> {
        if !self.min_midi.is_finite() || !self.max_midi.is_finite() {
            return Err(Error::Config(format!(
                "MIDI bounds must be finite, got [{}, {}]",
                self.min_midi, self.max_midi
            )));
        }
        if self.max_midi <= self.min_midi {
            return Err(Error::Config(format!(
                "max MIDI ({}) must be greater than min MIDI ({})",
                self.max_midi, self.min_midi
            )));
        }
        Ok(())
    }
}

/// Tuning constants (A440 equal temperament)
pub mod pitch_constants {
    /// Reference frequency of A4 (Hz)
    pub const A4_HZ: f64 = 440.0;

    /// MIDI note number of A4
    pub const A4_MIDI: f64 = 69.0;

    /// Semitones per octave
    pub const SEMITONES_PER_OCTAVE: f64 = 12.0;

    /// A0
    pub const PIANO_LOW_MIDI: f64 = 21.0;

    /// C8
    pub const PIANO_HIGH_MIDI: f64 = 108.0;
}
