//! Prime Table - multiplication table of the first N primes
//!
//! Usage: `primetable [-numcount <count>]`, count defaults to 10.
//! Argument problems are reported on stdout and the default count is used.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod args;
mod table;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use primetable_core::{GeneratorConfig, PrimeGenerator};

use args::{parse_args, CliConfig};
use table::{MultiplicationTable, TableStyle};

const RULE: &str = "-----------------------------------------------------";

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&args, &CliConfig::default(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&*e, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Single line per failure, the log event stays at debug
fn report_error<W: Write>(error: &dyn Error, out: &mut W) {
    tracing::debug!(error = %error, "failed to build table");
    let _ = writeln!(out, "Error: {}", error);
}

/// Print the banner, any argument diagnostics, and the table
fn run<W: Write>(args: &[String], config: &CliConfig, out: &mut W) -> Result<(), Box<dyn Error>> {
    print_banner(config, out)?;

    let parsed = parse_args(args, config);
    for diagnostic in &parsed.diagnostics {
        writeln!(out, "{}\n", diagnostic)?;
    }

    let generator = PrimeGenerator::with_config(GeneratorConfig {
        max_bound: config.max_bound,
        ..Default::default()
    });
    let primes = generator.first_n(i64::from(parsed.count))?;
    if primes.is_empty() {
        return Ok(());
    }

    let table = MultiplicationTable::new(&primes, TableStyle::default())?;
    write!(out, "{}", table)?;
    out.flush()?;
    Ok(())
}

fn print_banner<W: Write>(config: &CliConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Parameters:")?;
    writeln!(
        out,
        " {} - prime number count. Default value is {}.",
        config.count_flag, config.default_count
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(list: &[&str]) -> (Result<(), String>, String) {
        let args: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = run(&args, &CliConfig::default(), &mut out).map_err(|e| e.to_string());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_banner() {
        let (result, output) = run_with(&[]);
        assert!(result.is_ok());
        assert!(output.starts_with(
            "-----------------------------------------------------\n\
             Parameters:\n -numcount - prime number count. Default value is 10.\n\
             -----------------------------------------------------\n\n"
        ));
    }

    #[test]
    fn test_default_table() {
        let (result, output) = run_with(&[]);
        assert!(result.is_ok());
        assert!(output.contains(
            "     2    3    5    7    11   13   17   19   23   29   \n\n\
             2    4    6    10   14   22   26   34   38   46   58   \n\
             3    6    9    15   21   33   39   51   57   69   87   \n"
        ));
    }

    #[test]
    fn test_valid_argument() {
        let (result, output) = run_with(&["-numcount", "2"]);
        assert!(result.is_ok());
        assert!(output.contains("   2  3  \n\n2  4  6  \n3  6  9  \n"));
        assert!(!output.contains("5    10   15   \n"));
        assert!(!output.contains('5'));
    }

    #[test]
    fn test_missing_value() {
        let (result, output) = run_with(&["-numcount"]);
        assert!(result.is_ok());
        assert!(output.contains("Value of -numcount parameter not found.\n\n"));
        // Falls back to the default table
        assert!(output.contains("29   58   87"));
    }

    #[test]
    fn test_invalid_value() {
        let (result, output) = run_with(&["-numcount", "a"]);
        assert!(result.is_ok());
        assert!(output.contains("Value of -numcount parameter is not an integer.\n\n"));
        assert!(output.contains("29   58   87"));
    }

    #[test]
    fn test_zero_count() {
        let (result, output) = run_with(&["-numcount", "0"]);
        assert!(result.is_ok());
        assert!(output.ends_with(&format!("{}\n\n", RULE)));
    }

    #[test]
    fn test_count_beyond_max_bound() {
        let (result, output) = run_with(&["-numcount", "2147483647"]);
        let message = result.unwrap_err();
        assert!(message.contains("exceeds configured maximum 100000000"));
        assert!(output.ends_with(&format!("{}\n\n", RULE)));
    }

    #[test]
    fn test_unbounded_config() {
        let config = CliConfig {
            max_bound: None,
            ..Default::default()
        };
        let args = vec!["-numcount".to_string(), "2".to_string()];
        let mut out = Vec::new();
        assert!(run(&args, &config, &mut out).is_ok());
        assert!(String::from_utf8(out).unwrap().contains("3  6  9  \n"));
    }

    #[test]
    fn test_error_reported_once() {
        let args = vec!["-numcount".to_string(), "-1".to_string()];
        let error = run(&args, &CliConfig::default(), &mut Vec::new()).unwrap_err();

        let mut err = Vec::new();
        report_error(&*error, &mut err);
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("Error: Invalid argument: "));
    }

    #[test]
    fn test_negative_count() {
        let (result, _) = run_with(&["-numcount", "-1"]);
        let message = result.unwrap_err();
        assert!(message.contains("negative"));
    }
}
