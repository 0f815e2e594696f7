//! Frequency to MIDI pitch, and MIDI pitch to hue.

use crate::error::{Error, Result};
use crate::params::{pitch_constants::*, PitchRange};

/// Continuous MIDI pitch of a frequency (A4 = 440 Hz = 69)
///
/// Not rounded and not clamped. Zero, negative and non-finite frequencies
/// have no pitch and fail with [`Error::Domain`].
pub fn frequency_to_midi(frequency_hz: f64) -> Result<f64> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(Error::Domain(format!(
            "cannot take the pitch of {} Hz (frequency must be > 0)",
            frequency_hz
        )));
    }

    Ok(A4_MIDI + SEMITONES_PER_OCTAVE * (frequency_hz / A4_HZ).log2())
}

/// Clamp a MIDI pitch into `range` and rescale it linearly to [0, 1]
pub fn midi_to_hue(midi: f64, range: &PitchRange) -> f64 {
    let clamped = midi.clamp(range.min_midi, range.max_midi);
    (clamped - range.min_midi) / range.span()
}
