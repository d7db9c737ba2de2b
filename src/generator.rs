//! A sine signal generator with a fixed sample rate and a list of descriptive tags.

use crate::error::{GeneratorError, GeneratorResult};
use crate::oscillators::SineWaveOscillator;
use crate::signal::Signal;
use crate::types::*;

const INVALID_SAMPLE_RATE: &str = "Sample rate must be a positive number (greater than 0).";
const INVALID_POINT_COUNT: &str = "Number of points (n_points) must be greater than zero.";

/// Generates fixed-length waveforms at a fixed sample rate, and carries a list of free-form
/// text tags describing them.
///
/// Tags and synthesis are independent: generating a waveform never reads or changes the tags.
/// To share one generator between threads, wrap it in a `Mutex` so that setting and reading
/// tags can't interleave.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalGenerator {
    sample_rate: SampleRate,
    tags: Vec<String>,
}

impl SignalGenerator {
    /// Create a new generator sampling at `sample_rate` samples per second.
    ///
    /// Fails with [`GeneratorError::InvalidArgument`] unless the rate is finite and strictly
    /// positive.
    pub fn new(sample_rate: SampleRate) -> GeneratorResult<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            log::debug!("Rejecting sample rate {sample_rate}");
            return Err(GeneratorError::InvalidArgument(INVALID_SAMPLE_RATE));
        }

        log::debug!("Creating signal generator at {sample_rate} Hz");

        Ok(Self {
            sample_rate,
            tags: Vec::new(),
        })
    }

    /// Get the sample rate of the generator.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Replace all tags with the given sequence, keeping its order.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    /// Get a copy of the current tags.
    pub fn get_tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    /// Generate `n_points` samples of `amplitude * sin(2 * PI * frequency * t + phase)`, where
    /// sample `i` is taken at `t = i / sample_rate`.
    ///
    /// Frequencies above the Nyquist limit are accepted and will alias. Fails with
    /// [`GeneratorError::InvalidArgument`] if `n_points` is zero.
    pub fn generate_sine(&self,
                         amplitude: Amplitude,
                         frequency: Frequency,
                         phase: Phase,
                         n_points: usize)
        -> GeneratorResult<Vec<Sample>>
    {
        self.check_point_count(n_points)?;

        let oscillator = SineWaveOscillator::new(amplitude, frequency, phase);

        let mut samples = Vec::with_capacity(n_points);
        for i in 0..n_points {
            let time = self.time_at(i);
            samples.push(oscillator.evaluate(time));
        }

        Ok(samples)
    }

    /// Get the times, in seconds, that [`SignalGenerator::generate_sine`] samples at for the same
    /// `n_points`.
    pub fn time_axis(&self, n_points: usize) -> GeneratorResult<Vec<Time>> {
        self.check_point_count(n_points)?;

        Ok((0..n_points).map(|i| self.time_at(i)).collect())
    }

    /// The time of sample `index`.
    fn time_at(&self, index: usize) -> Time {
        index as f64 / self.sample_rate
    }

    fn check_point_count(&self, n_points: usize) -> GeneratorResult<()> {
        if n_points == 0 {
            log::debug!("Rejecting request for zero points");
            return Err(GeneratorError::InvalidArgument(INVALID_POINT_COUNT));
        }
        Ok(())
    }
}
