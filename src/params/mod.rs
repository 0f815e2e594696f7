//! Parameter definitions with units and documented defaults.
//!
//! Every tunable number of the pipeline lives here:
//! - MIDI bounds shared by the pitch mapper and the color synthesizer
//! - Swatch output settings for the renderer

mod pitch;
mod render;

// Re-export all types
pub use pitch::{pitch_constants, PitchRange};
pub use render::SwatchConfig;
