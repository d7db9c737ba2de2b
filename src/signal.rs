//! A minimal signal abstraction.

/// A trait for "signals" which have an input and an output type, and can be evaluated for the
/// given input.
pub trait Signal<IN, OUT>: Send {
    /// Evaluate this signal for the given input, yielding an output.
    fn evaluate(&self, input: IN) -> OUT;
}
