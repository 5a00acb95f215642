//! Bounded sieve of Eratosthenes
//!
//! Composite markers are packed 64 to a word. Index i is set when i is
//! composite or is 0 or 1.

use std::fmt;

use tracing::debug;

use crate::{PrimeError, PrimeResult};

const WORD_BITS: usize = u64::BITS as usize;

/// Composite markers for 0..=limit
#[derive(Clone, PartialEq, Eq)]
pub struct CompositeMarkers {
    /// Bitmap, one bit per index
    words: Vec<u64>,
    /// Number of indices (limit + 1)
    len: usize,
}

impl CompositeMarkers {
    fn new(len: usize) -> Self {
        CompositeMarkers {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    #[inline]
    fn test(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Number of markers (limit + 1)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest index covered
    pub fn limit(&self) -> u64 {
        self.len.saturating_sub(1) as u64
    }

    /// Marker at `index`, `None` past the limit
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.test(index))
    }

    /// True if `index` is within the limit and unmarked
    pub fn is_prime(&self, index: usize) -> bool {
        self.get(index) == Some(false)
    }

    /// Markers in index order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |index| self.test(index))
    }

    /// Unmarked indices in ascending order
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len)
            .filter(move |&index| !self.test(index))
            .map(|index| index as u64)
    }

    /// Markers as one bool per index
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }
}

impl fmt::Debug for CompositeMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeMarkers")
            .field("limit", &self.limit())
            .field("words", &self.words.len())
            .finish()
    }
}

/// Run the sieve of Eratosthenes over 0..=limit.
///
/// # Errors
///
/// - [`PrimeError::InvalidArgument`] if `limit` is 0
/// - [`PrimeError::Overflow`] if `limit + 1` markers cannot be addressed
pub fn sieve(limit: u64) -> PrimeResult<CompositeMarkers> {
    if limit == 0 {
        return Err(PrimeError::InvalidArgument(
            "Limit parameter cannot be zero".to_string(),
        ));
    }

    let len = usize::try_from(limit)
        .ok()
        .and_then(|limit| limit.checked_add(1))
        .ok_or_else(|| PrimeError::Overflow(format!("sieve limit {limit} is not addressable")))?;
    let limit = len - 1;

    let mut markers = CompositeMarkers::new(len);
    markers.mark(0);
    markers.mark(1);

    // i * i is checked so the loop ends instead of wrapping near usize::MAX
    let mut i: usize = 2;
    while let Some(square) = i.checked_mul(i).filter(|&square| square <= limit) {
        if !markers.test(i) {
            for multiple in (square..=limit).step_by(i) {
                markers.mark(multiple);
            }
        }
        i += 1;
    }

    debug!(limit, words = markers.words.len(), "sieve complete");
    Ok(markers)
}

/// Collect up to `count` primes from `markers` in ascending order
pub fn take_primes(markers: &CompositeMarkers, count: usize) -> Vec<u64> {
    let mut primes = Vec::with_capacity(count.min(markers.len()));
    primes.extend(markers.primes().take(count));
    primes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_prime_by_division(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_sieve_zero_limit() {
        assert!(matches!(sieve(0), Err(PrimeError::InvalidArgument(_))));
    }

    #[test]
    fn test_sieve_one() {
        let markers = sieve(1).unwrap();
        assert_eq!(markers.to_vec(), vec![true, true]);
        assert_eq!(markers.primes().count(), 0);
    }

    #[test]
    fn test_sieve_five() {
        let markers = sieve(5).unwrap();
        assert_eq!(
            markers.to_vec(),
            vec![true, true, false, false, true, false]
        );
        assert_eq!(markers.len(), 6);
        assert_eq!(markers.limit(), 5);
    }

    #[test]
    fn test_sieve_word_boundaries() {
        // 61 and 67 sit on either side of the first word boundary
        let markers = sieve(128).unwrap();
        assert!(markers.is_prime(61));
        assert!(!markers.is_prime(63));
        assert!(!markers.is_prime(64));
        assert!(markers.is_prime(67));
        assert!(markers.is_prime(127));
        assert!(!markers.is_prime(128));
        assert_eq!(markers.get(129), None);
        assert!(!markers.is_prime(129));
    }

    #[test]
    fn test_sieve_squares_marked() {
        let markers = sieve(1000).unwrap();
        for p in [2usize, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31] {
            assert_eq!(markers.get(p * p), Some(true));
        }
    }

    #[test]
    fn test_sieve_prime_count() {
        assert_eq!(sieve(100).unwrap().primes().count(), 25);
        assert_eq!(sieve(10_000).unwrap().primes().count(), 1229);
    }

    #[test]
    fn test_take_primes() {
        let markers = sieve(30).unwrap();
        assert_eq!(take_primes(&markers, 4), vec![2, 3, 5, 7]);
        assert_eq!(take_primes(&markers, 0), Vec::<u64>::new());
        // More requested than available
        assert_eq!(take_primes(&markers, 100).len(), 10);
    }

    proptest! {
        #[test]
        fn prop_sieve_matches_trial_division(limit in 1u64..5_000) {
            let markers = sieve(limit).unwrap();
            prop_assert_eq!(markers.len() as u64, limit + 1);
            for (index, composite) in markers.iter().enumerate() {
                prop_assert_eq!(composite, !is_prime_by_division(index as u64));
            }
        }
    }
}
