//! Command-line argument handling
//!
//! Only the count flag is recognised. A missing or non-integer value is
//! reported and the count keeps its previous value.

use thiserror::Error;
use tracing::debug;

/// Argument errors, displayed verbatim to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Value of {flag} parameter not found.")]
    MissingValue { flag: &'static str },

    #[error("Value of {flag} parameter is not an integer.")]
    NotAnInteger { flag: &'static str, value: String },
}

/// Largest sieve bound the CLI accepts, about 12 MB of markers
pub const DEFAULT_MAX_BOUND: u64 = 100_000_000;

/// CLI configuration
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Flag carrying the prime count
    pub count_flag: &'static str,
    /// Count used when the flag is absent or invalid
    pub default_count: i32,
    /// Sieve bound cap passed to the generator, `None` for no limit
    pub max_bound: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            count_flag: "-numcount",
            default_count: 10,
            max_bound: Some(DEFAULT_MAX_BOUND),
        }
    }
}

/// Parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub count: i32,
    /// Problems found while parsing, in argument order
    pub diagnostics: Vec<ArgsError>,
}

/// Scan `args` (program name excluded) for the count flag.
pub fn parse_args(args: &[String], config: &CliConfig) -> ParsedArgs {
    let mut parsed = ParsedArgs {
        count: config.default_count,
        diagnostics: Vec::new(),
    };

    for (i, arg) in args.iter().enumerate() {
        if arg != config.count_flag {
            continue;
        }

        match parse_count(args.get(i + 1).map(String::as_str), config.count_flag) {
            Ok(count) => parsed.count = count,
            Err(e) => {
                debug!(error = %e, "ignoring count flag");
                parsed.diagnostics.push(e);
            }
        }
    }

    parsed
}

fn parse_count(value: Option<&str>, flag: &'static str) -> Result<i32, ArgsError> {
    let value = value.ok_or(ArgsError::MissingValue { flag })?;
    value.trim().parse().map_err(|_| ArgsError::NotAnInteger {
        flag,
        value: value.to_string(),
    })
}
