//! Random Source Adapters

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::{OsRng, SmallRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::domain::RandomAlgorithm;
use crate::ports::{ConfigProvider, RandomSource, SecurityLogger};

/// Generator selected at construction time.
enum Generator {
    Std(StdRng),
    Os(OsRng),
    /// Non-cryptographic fallback used when the requested algorithm is unknown.
    Fallback(SmallRng),
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Std(rng) => rng.next_u32(),
            Generator::Os(rng) => rng.next_u32(),
            Generator::Fallback(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Generator::Std(rng) => rng.next_u64(),
            Generator::Os(rng) => rng.next_u64(),
            Generator::Fallback(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Generator::Std(rng) => rng.fill_bytes(dest),
            Generator::Os(rng) => rng.fill_bytes(dest),
            Generator::Fallback(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Generator::Std(rng) => rng.try_fill_bytes(dest),
            Generator::Os(rng) => rng.try_fill_bytes(dest),
            Generator::Fallback(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/// Production random source backed by the `rand` generators.
///
/// The algorithm is fixed at construction. An unknown algorithm name does
/// not fail construction: the source falls back to `SmallRng`, logs a
/// critical event and reports `is_degraded() == true` for its lifetime.
///
/// Each draw holds the generator lock only for that draw.
pub struct SecureRandomSource {
    algorithm: Option<RandomAlgorithm>,
    requested: String,
    generator: Mutex<Generator>,
}

impl SecureRandomSource {
    /// Create a source on a known algorithm.
    pub fn new(algorithm: RandomAlgorithm) -> Self {
        let generator = match algorithm {
            RandomAlgorithm::StdRng => Generator::Std(StdRng::from_entropy()),
            RandomAlgorithm::OsRng => Generator::Os(OsRng),
        };

        debug!(algorithm = %algorithm, "Random source initialised");

        Self {
            algorithm: Some(algorithm),
            requested: algorithm.as_str().to_string(),
            generator: Mutex::new(generator),
        }
    }

    /// Create a source from the configured algorithm name.
    ///
    /// Never fails: an unsupported name yields a degraded source and one
    /// critical entry on `logger`.
    pub fn from_config(config: &dyn ConfigProvider, logger: &dyn SecurityLogger) -> Self {
        let requested = config.get_random_algorithm();

        match requested.parse::<RandomAlgorithm>() {
            Ok(algorithm) => Self::new(algorithm),
            Err(_) => {
                logger.log_critical(&format!(
                    "Error creating randomizer: can't find random algorithm {requested}"
                ));
                warn!(
                    requested = %requested,
                    "Random source degraded to insecure fallback generator"
                );
                Self {
                    algorithm: None,
                    requested,
                    generator: Mutex::new(Generator::Fallback(SmallRng::from_entropy())),
                }
            }
        }
    }

    /// Algorithm in use, or `None` when running on the fallback.
    pub fn algorithm(&self) -> Option<RandomAlgorithm> {
        self.algorithm
    }

    /// Algorithm name as originally requested.
    pub fn requested_algorithm(&self) -> &str {
        &self.requested
    }
}

impl Default for SecureRandomSource {
    fn default() -> Self {
        Self::new(RandomAlgorithm::default())
    }
}

impl fmt::Debug for SecureRandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandomSource")
            .field("algorithm", &self.algorithm)
            .field("requested", &self.requested)
            .finish_non_exhaustive()
    }
}

impl RandomSource for SecureRandomSource {
    fn draw_int(&self, bound: u32) -> u32 {
        assert!(bound > 0, "draw bound must be positive");
        self.generator.lock().gen_range(0..bound)
    }

    fn draw_u64(&self, bound: u64) -> u64 {
        assert!(bound > 0, "draw bound must be positive");
        self.generator.lock().gen_range(0..bound)
    }

    fn draw_bool(&self) -> bool {
        self.generator.lock().gen_bool(0.5)
    }

    fn draw_f32(&self) -> f32 {
        self.generator.lock().gen::<f32>()
    }

    fn is_degraded(&self) -> bool {
        self.algorithm.is_none()
    }
}

/// Deterministic random source for reproducible tests.
///
/// Cycles through a fixed list of raw values; each draw consumes one value
/// and reduces it into the requested range.
///
/// # Example
///
/// ```
/// use wd_01_randomizer::{RandomSource, SequenceRandomSource};
///
/// let rng = SequenceRandomSource::new(vec![7, 12]);
/// assert_eq!(rng.draw_int(10), 7);
/// assert_eq!(rng.draw_int(10), 2);
/// assert_eq!(rng.draw_int(10), 7);
/// ```
#[derive(Debug)]
pub struct SequenceRandomSource {
    values: Vec<u64>,
    cursor: AtomicUsize,
}

impl SequenceRandomSource {
    /// Create a source cycling over `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// A source that always yields `value`.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    fn next(&self) -> u64 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}

impl RandomSource for SequenceRandomSource {
    fn draw_int(&self, bound: u32) -> u32 {
        assert!(bound > 0, "draw bound must be positive");
        (self.next() % u64::from(bound)) as u32
    }

    fn draw_u64(&self, bound: u64) -> u64 {
        assert!(bound > 0, "draw bound must be positive");
        self.next() % bound
    }

    fn draw_bool(&self) -> bool {
        self.next() & 1 == 1
    }

    fn draw_f32(&self) -> f32 {
        // 24 bits of mantissa keeps the result strictly below 1.0
        const SCALE: u64 = 1 << 24;
        (self.next() % SCALE) as f32 / SCALE as f32
    }
}
