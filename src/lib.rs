//! Synesthesia library - map a recording to the color of its dominant pitch

pub mod audio;
pub mod cli;
pub mod color;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod pitch;
pub mod rendering;

pub use color::{frequency_to_color, hsv_to_rgb, ColorTrace, Rgb};
pub use error::{Error, Result};
pub use params::{PitchRange, SwatchConfig};
pub use pipeline::{sound_to_color, sound_to_color_with, LogObserver, NullObserver, Observer};
pub use pitch::{frequency_to_midi, midi_to_hue};
