//! Pseudo-random sample source for generated telemetry.
//!
//! Production wiring owns a single [`SeededSampler`] per process, shared by
//! every worker behind a mutex: restarting the process replays the same
//! sequence, while each request advances it.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by the server at startup.
pub const DEFAULT_SEED: u64 = 42;

/// Exclusive upper bound of every sample.
pub const SAMPLE_MAX: f64 = 100.0;

/// Source of telemetry values.
pub trait Sampler: Send + Sync {
    /// Next value, uniform in `[0, 100)`.
    fn next_value(&self) -> f64;
}

/// Mutex-guarded `StdRng` seeded once.
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SeededSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Sampler for SeededSampler {
    fn next_value(&self) -> f64 {
        // A worker that panicked mid-draw leaves the rng in a valid state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..SAMPLE_MAX)
    }
}
