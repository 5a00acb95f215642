//! Upper bound estimation for the nth prime
//!
//! For n >= 6 the bound comes from the first [`REGIMES`] entry whose
//! threshold does not exceed n. Entries are ordered from the highest
//! threshold down, each one a tighter asymptotic bound on p(n) within its
//! range. Below 6 the asymptotic forms are too loose and the exact primes
//! are returned instead.

use tracing::debug;

use crate::{PrimeError, PrimeResult};

/// Exact values of p(1)..=p(5)
pub const SMALL_PRIMES: [u64; 5] = [2, 3, 5, 7, 11];

/// Bound formula, called with (n, ln n, ln ln n)
pub type BoundFormula = fn(f64, f64, f64) -> f64;

/// One asymptotic regime of the nth prime bound
#[derive(Clone, Copy, Debug)]
pub struct BoundRegime {
    /// Smallest n the formula applies to
    pub threshold: u64,
    /// Upper bound on p(n)
    pub formula: BoundFormula,
}

/// Regimes ordered by descending threshold
pub const REGIMES: [BoundRegime; 5] = [
    BoundRegime {
        threshold: 688_383,
        formula: from_688383,
    },
    BoundRegime {
        threshold: 178_974,
        formula: from_178974,
    },
    BoundRegime {
        threshold: 39_017,
        formula: from_39017,
    },
    BoundRegime {
        threshold: 7_022,
        formula: from_7022,
    },
    BoundRegime {
        threshold: 6,
        formula: from_6,
    },
];

fn from_688383(n: f64, ln: f64, lnln: f64) -> f64 {
    n * (ln + lnln - 1.0 + (lnln - 2.00) / ln)
}

fn from_178974(n: f64, ln: f64, lnln: f64) -> f64 {
    n * (ln + lnln - 1.0 + (lnln - 1.95) / ln)
}

fn from_39017(n: f64, ln: f64, lnln: f64) -> f64 {
    n * (ln + lnln - 0.9484)
}

fn from_7022(n: f64, ln: f64, lnln: f64) -> f64 {
    n * (ln + 0.6000 * lnln)
}

fn from_6(n: f64, ln: f64, lnln: f64) -> f64 {
    n * ln + n * lnln
}

/// Estimate an upper bound for the nth prime.
///
/// Returns 0 for n = 0. The bound is truncated toward zero.
///
/// # Errors
///
/// - [`PrimeError::InvalidArgument`] if `n` is negative
/// - [`PrimeError::Overflow`] if the estimate does not fit in a `u64`
pub fn estimate(n: i64) -> PrimeResult<u64> {
    let n = u64::try_from(n).map_err(|_| {
        PrimeError::InvalidArgument(format!("N parameter cannot be negative number: {n}"))
    })?;

    if n == 0 {
        return Ok(0);
    }

    if let Some(&exact) = usize::try_from(n - 1)
        .ok()
        .and_then(|index| SMALL_PRIMES.get(index))
    {
        return Ok(exact);
    }

    let regime = regime_for(n).ok_or_else(|| {
        PrimeError::InvalidArgument(format!("no bound regime covers n = {n}"))
    })?;

    let x = n as f64;
    let ln = x.ln();
    let lnln = ln.ln();
    let bound = checked_bound((regime.formula)(x, ln, lnln))?;

    debug!(n, threshold = regime.threshold, bound, "estimated nth prime bound");
    Ok(bound)
}

/// First regime (highest threshold) that applies to `n`
pub fn regime_for(n: u64) -> Option<&'static BoundRegime> {
    REGIMES.iter().find(|regime| n >= regime.threshold)
}

/// Truncate a floating point estimate to `u64`, rejecting values out of range
fn checked_bound(upper: f64) -> PrimeResult<u64> {
    if !upper.is_finite() || upper >= u64::MAX as f64 {
        return Err(PrimeError::Overflow(format!(
            "Prime number upper limit overflow: {upper:e}"
        )));
    }
    if upper < 0.0 {
        return Err(PrimeError::InvalidArgument(format!(
            "negative bound estimate: {upper}"
        )));
    }
    Ok(upper as u64)
}
