//! Whole-signal FFT and dominant frequency estimation.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{Error, Result};

/// Forward FFT of the full sample sequence (no window applied)
pub fn spectrum(samples: &[f32]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();

    if buffer.is_empty() {
        return buffer;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
}

/// Center frequency (Hz) of every FFT bin for `n` samples at `sample_rate`
///
/// Bins are laid out in FFT order: DC, positive frequencies, then negative
/// frequencies counting back up towards zero.
pub fn frequency_bins(n: usize, sample_rate: u32) -> Vec<f64> {
    let resolution_hz = sample_rate as f64 / n as f64;
    let positive = (n + 1) / 2;

    (0..n)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k * resolution_hz
        })
        .collect()
}

/// Frequency (Hz) of the strongest bin between DC and Nyquist
///
/// Only bins `[0, n/2)` are candidates. DC is one of them, so a signal with a
/// large offset (or pure silence) reports 0 Hz.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32) -> Result<f64> {
    let n = samples.len();
    let half = n / 2;

    if sample_rate == 0 {
        return Err(Error::Domain("sample rate must be > 0".to_string()));
    }
    if half == 0 {
        return Err(Error::Domain(format!(
            "spectrum of {} sample(s) has no candidate bins",
            n
        )));
    }

    let spectrum = spectrum(samples);
    let freqs = frequency_bins(n, sample_rate);

    let peak = argmax_magnitude(&spectrum[..half]);
    log::debug!(
        "Spectral peak: bin {} of {} ({:.3} Hz, |X| = {:.3})",
        peak,
        half,
        freqs[peak],
        spectrum[peak].norm()
    );

    Ok(freqs[peak].abs())
}

/// Index of the largest magnitude (first one wins on ties)
fn argmax_magnitude(bins: &[Complex<f64>]) -> usize {
    let mut best = 0;
    let mut best_mag = f64::NEG_INFINITY;

    for (i, c) in bins.iter().enumerate() {
        let mag = c.norm();
        if mag > best_mag {
            best = i;
            best_mag = mag;
        }
    }

    best
}
