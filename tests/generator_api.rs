use std::f64::consts::PI;
use std::sync::{Arc, Mutex};
use std::thread;

use approx::assert_abs_diff_eq;
use siggen::{GeneratorError, SignalGenerator};

#[test]
fn sine_from_public_api() {
    let generator = SignalGenerator::new(1000.0).unwrap();
    let y = generator.generate_sine(1.0, 5.0, PI / 4.0, 500).unwrap();
    let x = generator.time_axis(500).unwrap();

    assert_eq!(y.len(), 500);
    assert_eq!(x.len(), 500);

    // First sample is just the phase offset.
    assert_abs_diff_eq!(y[0], f64::sin(PI / 4.0), epsilon = 1e-12);

    // 5Hz at 1kHz repeats every 200 samples.
    for i in 0..300 {
        assert_abs_diff_eq!(y[i], y[i + 200], epsilon = 1e-9);
    }

    // Samples pair up with their times.
    for (time, sample) in x.iter().zip(y.iter()) {
        assert_abs_diff_eq!(*sample, f64::sin(2.0 * PI * 5.0 * time + PI / 4.0), epsilon = 1e-9);
    }
}

#[test]
fn zero_points_is_an_error_not_an_empty_buffer() {
    let generator = SignalGenerator::new(1000.0).unwrap();
    let err = generator.generate_sine(1.0, 5.0, 0.0, 0).unwrap_err();

    assert!(matches!(err, GeneratorError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: Number of points (n_points) must be greater than zero.");
}

#[test]
fn bad_sample_rate_is_an_error() {
    let err = SignalGenerator::new(0.0).unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: Sample rate must be a positive number (greater than 0).");
    assert!(SignalGenerator::new(-1000.0).is_err());
}

#[test]
fn shared_generator_keeps_whole_tag_sets() {
    let generator = Arc::new(Mutex::new(SignalGenerator::new(1000.0).unwrap()));

    let tag_sets: Vec<Vec<String>> = (0..8)
        .map(|i| (0..16).map(|j| format!("thread{i}-tag{j}")).collect())
        .collect();

    let handles: Vec<_> = tag_sets
        .iter()
        .cloned()
        .map(|tags| {
            let generator = generator.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    generator.lock().unwrap().set_tags(tags.clone());
                    let seen = generator.lock().unwrap().get_tags();
                    // Whatever was seen must be one complete set, never a mix.
                    assert_eq!(seen.len(), 16);
                    let prefix = seen[0].split('-').next().unwrap().to_string();
                    assert!(seen.iter().all(|tag| tag.starts_with(&prefix)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let last = generator.lock().unwrap().get_tags();
    assert!(tag_sets.contains(&last));

    // Synthesis works the same from behind the lock.
    let samples = generator.lock().unwrap().generate_sine(1.0, 5.0, 0.0, 4).unwrap();
    assert_eq!(samples.len(), 4);
}

#[test]
fn generator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SignalGenerator>();
}
