use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every flip made during a solve, across all attempts.
    pub total_flips: usize,

    /// A count of attempts started, each from a fresh random valuation.
    pub restarts: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
