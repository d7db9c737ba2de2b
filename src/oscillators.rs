//! Basic oscillators that can output simple shapes like sine waves.

use crate::{functions::sine_wave, signal::Signal, types::*};

/// A sine wave oscillator with a fixed amplitude, frequency and phase offset that can be sampled
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWaveOscillator {
    amplitude: Amplitude,
    frequency: Frequency,
    phase: Phase,
}

impl SineWaveOscillator {
    /// Create a new sine wave oscillator.
    ///
    /// None of the parameters are restricted: a negative amplitude inverts the wave, and
    /// frequencies above the Nyquist limit of whoever samples it will simply alias.
    pub fn new(amplitude: Amplitude, frequency: Frequency, phase: Phase) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn amplitude(&self) -> Amplitude {
        self.amplitude
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Signal<Time, Sample> for SineWaveOscillator {
    fn evaluate(&self, time: Time) -> Sample {
        self.amplitude * sine_wave(time, self.frequency, self.phase)
    }
}
