//! Parametric signal generation: a sample-rate-bound generator that synthesizes sine waveforms
//! into dense buffers and carries a list of descriptive tags.

pub mod error;
pub mod functions;
pub mod generator;
pub mod oscillators;
pub mod signal;
pub mod types;

pub use error::{GeneratorError, GeneratorResult};
pub use generator::SignalGenerator;
