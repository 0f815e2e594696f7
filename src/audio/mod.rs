//! Audio loading and spectral analysis.
//!
//! Reads uncompressed PCM WAV files with hound and runs a single forward
//! FFT over the whole recording to find its dominant frequency.

mod fft;
mod loader;

// Re-export public types
pub use fft::{dominant_frequency, frequency_bins, spectrum};
pub use loader::{load_waveform, read_waveform, Waveform};
