//! Seeded test RNG — reproducible randomness for nondeterministic tests.
//!
//! Tests that need random data construct a [`SeededRng`]; the seed it picked
//! is printed to stderr, so a failing run can be replayed exactly by
//! re-supplying that seed through [`SEED_ENV_VAR`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Environment variable consulted by [`SeededRng::from_env`] to override the
/// seed for a reproduction run.
pub const SEED_ENV_VAR: &str = "LATTICE_TEST_SEED";

/// A deterministic random number source with an observable seed.
///
/// Given the same seed, two instances produce identical sequences within the
/// same binary. Reproducibility across platforms or engine upgrades is not
/// promised. The engine is owned exclusively by the instance; calling
/// [`next_u64`](Self::next_u64) from multiple threads requires external
/// synchronization — each test thread is expected to own its own generator.
#[derive(Debug)]
pub struct SeededRng {
    seed: u64,
    engine: StdRng,
}

impl SeededRng {
    /// Creates a generator, seeding from the [`SEED_ENV_VAR`] environment
    /// variable when set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    /// Creates a generator from an optional seed override.
    ///
    /// An override that parses as a `u64` is used verbatim; an absent or
    /// unparsable override falls back to an entropy-derived seed rather
    /// than failing, so a malformed reproduction attempt still yields a
    /// working (if different) run. The chosen seed is printed to stderr
    /// either way.
    #[must_use]
    pub fn new(override_seed: Option<&str>) -> Self {
        let seed = override_seed
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(rand::random);
        Self::with_seed(seed)
    }

    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        eprintln!("{}", seed_banner(seed));
        Self {
            seed,
            engine: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the seed this generator was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the next value in the deterministic sequence.
    pub fn next_u64(&mut self) -> u64 {
        self.engine.random()
    }
}

fn seed_banner(seed: u64) -> String {
    format!("lattice test RNG seed: {seed} (set {SEED_ENV_VAR}={seed} to reproduce this run)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_identical_sequence() {
        // Arrange
        let mut first = SeededRng::with_seed(0xDEAD_BEEF);
        let mut second = SeededRng::with_seed(0xDEAD_BEEF);

        // Act / Assert
        for _ in 0..1000 {
            assert_eq!(first.next_u64(), second.next_u64());
        }
    }

    #[test]
    fn test_override_seed_is_used_verbatim() {
        // Arrange
        let mut generator = SeededRng::new(Some("12345"));

        // Act
        let mut reference = StdRng::seed_from_u64(12345);

        // Assert. The wrapper must not perturb the engine's output.
        assert_eq!(generator.seed(), 12345);
        for _ in 0..3 {
            assert_eq!(generator.next_u64(), reference.random::<u64>());
        }
    }

    #[test]
    fn test_entropy_fallback_yields_distinct_seeds() {
        // Arrange / Act
        let first = SeededRng::new(None);
        let second = SeededRng::new(None);

        // Assert. A collision of two 64-bit entropy draws is vanishingly
        // unlikely; equality here points at a broken fallback path.
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_unparsable_override_falls_back_to_entropy() {
        // Arrange / Act
        let first = SeededRng::new(Some("not-a-seed"));
        let second = SeededRng::new(Some("not-a-seed"));

        // Assert
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_seed_banner_contains_seed_and_rerun_override() {
        // Act
        let banner = seed_banner(12345);

        // Assert
        assert!(banner.contains("12345"));
        assert!(banner.contains(SEED_ENV_VAR));
    }
}
