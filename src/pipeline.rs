//! End-to-end pipeline: WAV file to color.
//!
//! Data flows strictly forward:
//! file → waveform → mono samples → dominant frequency → MIDI → hue → RGB.
//! Diagnostics are handed to an [`Observer`] so the computation itself never
//! prints.

use std::path::Path;

use crate::audio::{dominant_frequency, load_waveform};
use crate::color::{frequency_to_color, ColorTrace, Rgb};
use crate::error::{Error, Result};
use crate::params::PitchRange;

/// Observability hook for the pipeline (all methods default to no-ops)
pub trait Observer {
    fn dominant_frequency(&mut self, _frequency_hz: f64) {}

    fn color(&mut self, _trace: &ColorTrace) {}
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn dominant_frequency(&mut self, frequency_hz: f64) {
        log::info!("Dominant frequency: {:.3} Hz", frequency_hz);
    }

    fn color(&mut self, trace: &ColorTrace) {
        log::info!("{}", trace);
    }
}

/// Discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Color of the recording at `path`, with diagnostics sent to `log`
pub fn sound_to_color(path: impl AsRef<Path>, range: &PitchRange) -> Result<Rgb> {
    sound_to_color_with(path, range, &mut LogObserver)
}

/// Color of the recording at `path`, reporting to `observer`
///
/// A dominant frequency of 0 Hz (silence, or a DC-dominated signal) has no
/// pitch and fails with [`Error::Domain`].
pub fn sound_to_color_with(
    path: impl AsRef<Path>,
    range: &PitchRange,
    observer: &mut dyn Observer,
) -> Result<Rgb> {
    range.validate()?;

    let waveform = load_waveform(path)?;
    log::debug!(
        "Loaded {:.2}s of audio ({} ch @ {}Hz)",
        waveform.duration_secs(),
        waveform.channels(),
        waveform.sample_rate()
    );

    let mono = waveform.to_mono();
    let frequency_hz = dominant_frequency(&mono, waveform.sample_rate())?;
    observer.dominant_frequency(frequency_hz);

    if frequency_hz == 0.0 {
        return Err(Error::Domain(
            "dominant frequency is 0 Hz (silent or DC-dominated recording)".to_string(),
        ));
    }

    let trace = frequency_to_color(frequency_hz, range)?;
    observer.color(&trace);

    Ok(trace.color)
}
