//! Basic shape functions.

use std::f64::consts::PI;

use crate::types::*;

/// Generate a sine wave of a given frequency and phase offset at a given time.
pub fn sine_wave(time: Time, frequency: Frequency, phase: Phase) -> Sample {
    let ft = frequency * time;
    f64::sin(2.0 * PI * ft + phase)
}
