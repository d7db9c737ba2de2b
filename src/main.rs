use std::error::Error;
use std::f64::consts::PI;

use siggen::types::*;
use siggen::{GeneratorError, SignalGenerator};

/// The sample rate of the demo generator.
const SAMPLE_RATE: SampleRate = 1000.0;

/// The waveform the demo generates.
const AMPLITUDE: Amplitude = 1.0;
const FREQUENCY: Frequency = 5.0;
const PHASE: Phase = PI / 4.0;
const N_POINTS: usize = 500;

/// The tags attached to the demo generator.
const TAGS: [&str; 3] = ["sine", "test", "siggen"];

/// Run the command-line signal generator demo.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialise logging.
    env_logger::init();

    let generator = SignalGenerator::new(SAMPLE_RATE)?;

    // Asking for no points is a mistake and should be reported, not crash.
    match generator.generate_sine(AMPLITUDE, FREQUENCY, 0.0, 0) {
        Err(err @ GeneratorError::InvalidArgument(_)) => {
            log::warn!("Zero-point request rejected: {err}");
            println!("Caught generator error: {err}");
        }
        Ok(samples) => {
            return Err(format!("Zero-point request returned {} samples", samples.len()).into());
        }
    }

    let mut generator = SignalGenerator::new(SAMPLE_RATE)?;

    generator.set_tags(TAGS);
    println!("Tags: {:?}", generator.get_tags());

    log::info!("Generating {N_POINTS} points of a {FREQUENCY} Hz sine at {SAMPLE_RATE} Hz");
    let y = generator.generate_sine(AMPLITUDE, FREQUENCY, PHASE, N_POINTS)?;
    let x = generator.time_axis(N_POINTS)?;

    // Plot-ready pairs, time in seconds then amplitude.
    println!("# Sine {FREQUENCY}Hz");
    println!("# time (s)\tamplitude");
    for (time, sample) in x.iter().zip(y.iter()) {
        println!("{time:.4}\t{sample:.6}");
    }

    log::info!("Done");
    Ok(())
}
