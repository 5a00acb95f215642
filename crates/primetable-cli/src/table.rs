//! Fixed-column multiplication table
//!
//! Every cell is left-aligned in a column as wide as the largest product
//! plus padding. The header row starts with an empty corner cell and is
//! followed by a blank line.

use std::fmt;

use primetable_core::{PrimeError, PrimeResult};

/// Table layout
#[derive(Clone, Copy, Debug)]
pub struct TableStyle {
    /// Spaces added to the widest cell
    pub padding: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle { padding: 2 }
    }
}

/// Multiplication table over a sequence of numbers
#[derive(Debug)]
pub struct MultiplicationTable<'a> {
    values: &'a [u64],
    width: usize,
}

impl<'a> MultiplicationTable<'a> {
    /// Build a table, checking that the largest product fits in a `u64`
    pub fn new(values: &'a [u64], style: TableStyle) -> PrimeResult<Self> {
        let largest = match values.iter().max() {
            Some(&max) => max.checked_mul(max).ok_or_else(|| {
                PrimeError::Overflow(format!("product {max} * {max} does not fit in u64"))
            })?,
            None => 0,
        };

        Ok(MultiplicationTable {
            values,
            width: digits(largest) + style.padding,
        })
    }
}

impl fmt::Display for MultiplicationTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;

        write!(f, "{:width$}", "")?;
        for value in self.values {
            write!(f, "{value:<width$}")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for &row in self.values {
            write!(f, "{row:<width$}")?;
            for &column in self.values {
                // Bounded by the square checked in new()
                write!(f, "{:<width$}", row * column)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Decimal digit count
fn digits(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
