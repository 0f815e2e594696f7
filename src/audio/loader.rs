//! WAV decoding and channel reduction.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Decoded recording: sample rate plus interleaved samples
///
/// Integer PCM is normalised to [-1, 1); float PCM is kept as-is.
#[derive(Debug, Clone)]
pub struct Waveform {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f32>,
}

impl Waveform {
    /// Build a waveform from interleaved samples
    ///
    /// A trailing partial frame is dropped. Fails if the rate or channel
    /// count is zero, or if no complete frame remains.
    pub fn new(sample_rate: u32, channels: u16, mut samples: Vec<f32>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::Format("sample rate must be > 0".to_string()));
        }
        if channels == 0 {
            return Err(Error::Format("channel count must be > 0".to_string()));
        }

        let complete = samples.len() - samples.len() % channels as usize;
        samples.truncate(complete);

        if samples.is_empty() {
            return Err(Error::Format("waveform contains no samples".to_string()));
        }

        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Samples per channel
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Reduce to a single channel by averaging each frame
    pub fn to_mono(&self) -> Vec<f32> {
        let channels = self.channels as usize;
        if channels == 1 {
            return self.samples.clone();
        }

        self.samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    }
}

/// Load a WAV file from disk
pub fn load_waveform(path: impl AsRef<Path>) -> Result<Waveform> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path)?;
    read_waveform(BufReader::new(file))
}

/// Decode a WAV stream
pub fn read_waveform<R: Read>(reader: R) -> Result<Waveform> {
    let reader = hound::WavReader::new(reader).map_err(decode_error)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(decode_error)?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<std::result::Result<_, _>>()
                .map_err(decode_error)?
        }
    };

    log::debug!(
        "Decoded {} samples ({} ch @ {}Hz, {}-bit {:?})",
        samples.len(),
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    Waveform::new(spec.sample_rate, spec.channels, samples)
}

/// Running out of bytes mid-header or mid-sample means a corrupt container,
/// not an unreadable file. hound reports a short read as `ErrorKind::Other`.
fn decode_error(err: hound::Error) -> Error {
    match err {
        hound::Error::IoError(e)
            if matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Other
            ) =>
        {
            Error::Format(format!("truncated waveform: {}", e))
        }
        other => other.into(),
    }
}
