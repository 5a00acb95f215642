//! Prime Table Core - first N primes via a bounded sieve
//!
//! This crate implements the prime pipeline:
//! - Upper bound estimation for the nth prime
//! - Sieve of Eratosthenes over that bound
//! - Extraction of the first N primes in ascending order
//! - Error types shared with the table renderer

pub mod bound;
pub mod sieve;
pub mod generator;
pub mod error;

pub use bound::*;
pub use sieve::*;
pub use generator::*;
pub use error::*;
