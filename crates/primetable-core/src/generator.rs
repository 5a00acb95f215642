//! Prime generator - estimate, sieve, extract

use tracing::{debug, warn};

use crate::{estimate, sieve, take_primes, PrimeError, PrimeResult};

/// What to do when the sieve yields fewer primes than requested
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShortfallPolicy {
    /// Return the shorter sequence
    #[default]
    Accept,
    /// Double the bound and sieve again until enough primes are found
    Extend,
}

/// Prime generator configuration
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfig {
    /// Largest bound the generator will sieve, `None` for no limit
    pub max_bound: Option<u64>,
    /// Behaviour when the estimated bound is too small
    pub shortfall: ShortfallPolicy,
}

impl GeneratorConfig {
    /// Configuration that refuses bounds above `max_bound`
    pub fn bounded(max_bound: u64) -> Self {
        GeneratorConfig {
            max_bound: Some(max_bound),
            ..Default::default()
        }
    }

    /// Configuration that grows the bound on shortfall
    pub fn extending() -> Self {
        GeneratorConfig {
            shortfall: ShortfallPolicy::Extend,
            ..Default::default()
        }
    }
}

/// Generates the first N primes
#[derive(Clone, Debug, Default)]
pub struct PrimeGenerator {
    config: GeneratorConfig,
}

impl PrimeGenerator {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        PrimeGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// First `count` primes in ascending order.
    ///
    /// # Errors
    ///
    /// - [`PrimeError::InvalidArgument`] if `count` is negative
    /// - [`PrimeError::Overflow`] if the bound does not fit in a `u64`
    /// - [`PrimeError::BoundTooLarge`] if the bound exceeds `max_bound`
    pub fn first_n(&self, count: i64) -> PrimeResult<Vec<u64>> {
        if count < 0 {
            return Err(PrimeError::InvalidArgument(format!(
                "Count parameter cannot be negative number: {count}"
            )));
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let wanted = usize::try_from(count)
            .map_err(|_| PrimeError::Overflow(format!("count {count} is not addressable")))?;
        let bound = estimate(count)?;
        self.collect(wanted, bound)
    }

    /// Sieve from `bound` until `wanted` primes are found or the policy gives up
    fn collect(&self, wanted: usize, mut bound: u64) -> PrimeResult<Vec<u64>> {
        loop {
            self.check_bound(bound)?;

            let markers = sieve(bound)?;
            let primes = take_primes(&markers, wanted);
            debug!(wanted, bound, found = primes.len(), "extracted primes");

            if primes.len() == wanted {
                return Ok(primes);
            }

            match self.config.shortfall {
                ShortfallPolicy::Accept => {
                    warn!(wanted, bound, found = primes.len(), "bound estimate fell short");
                    return Ok(primes);
                }
                ShortfallPolicy::Extend => {
                    bound = bound.checked_mul(2).ok_or_else(|| {
                        PrimeError::Overflow(format!("cannot extend bound {bound}"))
                    })?;
                    warn!(wanted, bound, "bound estimate fell short, extending");
                }
            }
        }
    }

    fn check_bound(&self, bound: u64) -> PrimeResult<()> {
        match self.config.max_bound {
            Some(max) if bound > max => Err(PrimeError::BoundTooLarge { bound, max }),
            _ => Ok(()),
        }
    }
}

/// First `count` primes in ascending order, with default configuration.
///
/// The result can be shorter than `count` if the bound estimate falls
/// short; use a [`PrimeGenerator`] with [`ShortfallPolicy::Extend`] to
/// rule that out.
pub fn first_n_primes(count: i64) -> PrimeResult<Vec<u64>> {
    PrimeGenerator::new().first_n(count)
}
