//! Shared type definitions.

/// A type representing a point in time, in seconds.
pub type Time = f64;

/// A type representing a frequency, in cycles per second.
pub type Frequency = f64;

/// A type representing the peak value of a waveform.
pub type Amplitude = f64;

/// A type representing a phase offset, in radians.
pub type Phase = f64;

/// A type representing a single generated sample.
pub type Sample = f64;

/// A type representing a sampling rate, in samples per second.
pub type SampleRate = f64;
