//! End-to-end tests: synthesised WAV files through the full pipeline.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use synesthesia::audio::{dominant_frequency, load_waveform};
use synesthesia::rendering::save_swatch;
use synesthesia::{
    frequency_to_color, sound_to_color, sound_to_color_with, Error, NullObserver, PitchRange,
    SwatchConfig,
};

const SAMPLE_RATE: u32 = 44100;

fn tone(freq_hz: f64, amplitude: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / SAMPLE_RATE as f64).sin())
        .collect()
}

/// Write interleaved frames as 16-bit PCM
fn write_pcm16(path: &Path, channels: &[Vec<f64>]) {
    let spec = hound::WavSpec {
        channels: channels.len() as u16,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..channels[0].len() {
        for channel in channels {
            writer
                .write_sample((channel[i] * i16::MAX as f64).round() as i16)
                .unwrap();
        }
    }
    writer.finalize().unwrap();
}

fn fixture(dir: &tempfile::TempDir, name: &str, channels: &[Vec<f64>]) -> PathBuf {
    let path = dir.path().join(name);
    write_pcm16(&path, channels);
    path
}

#[test]
fn test_a440_file_matches_direct_synthesis() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "a440.wav", &[tone(440.0, 0.8, SAMPLE_RATE as usize)]);

    let range = PitchRange::default();
    let from_file = sound_to_color(&path, &range).unwrap();
    let direct = frequency_to_color(440.0, &range).unwrap().color;

    assert_eq!(from_file, direct);
}

#[test]
fn test_one_second_tone_within_one_bin() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "tone.wav", &[tone(440.0, 0.5, SAMPLE_RATE as usize)]);

    let wave = load_waveform(&path).unwrap();
    let freq = dominant_frequency(&wave.to_mono(), wave.sample_rate()).unwrap();
    let bin_width = wave.sample_rate() as f64 / wave.frame_count() as f64;

    assert!((freq - 440.0).abs() <= bin_width);
}

#[test]
fn test_stereo_with_silent_channel() {
    let dir = tempfile::tempdir().unwrap();
    let len = SAMPLE_RATE as usize;
    let path = fixture(&dir, "stereo.wav", &[vec![0.0; len], tone(440.0, 0.8, len)]);

    let wave = load_waveform(&path).unwrap();
    assert_eq!(wave.channels(), 2);

    let mono = wave.to_mono();
    assert_eq!(mono.len(), len);

    // Averaging halves the amplitude
    let peak = mono.iter().fold(0.0f32, |a, s| a.max(s.abs()));
    assert!((peak - 0.4).abs() < 0.01);

    let freq = dominant_frequency(&mono, wave.sample_rate()).unwrap();
    assert!((freq - 440.0).abs() <= 1.0);
}

#[test]
fn test_higher_pitch_moves_hue_forward() {
    let dir = tempfile::tempdir().unwrap();
    let len = SAMPLE_RATE as usize / 2;
    let low = fixture(&dir, "low.wav", &[tone(110.0, 0.8, len)]);
    let high = fixture(&dir, "high.wav", &[tone(1760.0, 0.8, len)]);
    let range = PitchRange::default();

    let low_color = sound_to_color_with(&low, &range, &mut NullObserver).unwrap();
    let high_color = sound_to_color_with(&high, &range, &mut NullObserver).unwrap();

    // A2 (MIDI 45) lands in yellow-green, A6 (MIDI 93) in magenta
    assert!(low_color.r > low_color.b);
    assert!(high_color.b > high_color.r);
}

#[test]
fn test_silent_file_is_domain_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "silence.wav", &[vec![0.0; 2048]]);

    let result = sound_to_color(&path, &PitchRange::default());
    assert!(matches!(result, Err(Error::Domain(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = sound_to_color(dir.path().join("missing.wav"), &PitchRange::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_non_wav_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.wav");
    std::fs::write(&path, "this is a text file, not audio").unwrap();

    let result = sound_to_color(&path, &PitchRange::default());
    assert!(matches!(result, Err(Error::Format(_))));
}

#[test]
fn test_file_to_swatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "a440.wav", &[tone(440.0, 0.8, SAMPLE_RATE as usize)]);

    let color = sound_to_color(&path, &PitchRange::default()).unwrap();
    let config = SwatchConfig::new(32, dir.path().join("a440.png"));
    save_swatch(color, &config).unwrap();

    let img = image::open(&config.output_path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (32, 32));
    assert_eq!(img.get_pixel(0, 0).0, color.to_rgb8());
}
