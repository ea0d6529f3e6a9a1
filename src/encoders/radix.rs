//! Arbitrary-precision conversion of digit arrays between bases.
//!
//! Digits are most significant first. Two strategies are available: plain
//! repeated long division over the digit array, and a `num-bigint` backed
//! conversion. Both produce identical output.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Converts digit sequences from one base to another.
///
/// Implementors only provide [`convert_normalized`](Self::convert_normalized),
/// which may drop leading zeros. [`convert`](Self::convert) wraps it so that
/// the number of leading zero digits survives the conversion, which is what
/// keeps `"\x00abc"` distinguishable from `"abc"`.
pub trait RadixConverter: fmt::Debug + Send + Sync {
    /// Converts `digits` (in `source_base`) to the minimal digit sequence in
    /// `target_base`. An empty input yields an empty output.
    fn convert_normalized(&self, digits: &[u64], target_base: u64, source_base: u64)
    -> Vec<u64>;

    /// Converts `digits` keeping one zero digit in the output for every
    /// leading zero digit of the input.
    fn convert(&self, digits: &[u64], target_base: u64, source_base: u64) -> Vec<u64> {
        let zeros = digits.iter().take_while(|&&d| d == 0).count();
        let converted = self.convert_normalized(&digits[zeros..], target_base, source_base);

        if zeros == 0 {
            return converted;
        }

        let mut result = Vec::with_capacity(zeros + converted.len());
        result.resize(zeros, 0);
        result.extend_from_slice(&converted);
        result
    }
}

fn check_bases(target_base: u64, source_base: u64) {
    assert!(target_base >= 2, "target base must be at least 2, got {}", target_base);
    assert!(source_base >= 2, "source base must be at least 2, got {}", source_base);
}

/// Repeated long division over the digit array.
///
/// Each pass divides the whole number by `target_base`, emitting the
/// remainder as the next least significant output digit. Every digit should
/// be below `source_base`; a single-digit input may hold any `u64`, which is
/// how integers are encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongDivision;

impl RadixConverter for LongDivision {
    fn convert_normalized(
        &self,
        digits: &[u64],
        target_base: u64,
        source_base: u64,
    ) -> Vec<u64> {
        check_bases(target_base, source_base);

        let target = u128::from(target_base);
        let source = u128::from(source_base);

        let mut working = digits.to_vec();
        let mut result = Vec::new();

        while !working.is_empty() {
            let mut quotient = Vec::with_capacity(working.len());
            let mut remainder: u128 = 0;

            for &digit in &working {
                let accumulator = u128::from(digit) + remainder * source;
                remainder = accumulator % target;
                let digit = accumulator / target;

                if !quotient.is_empty() || digit != 0 {
                    quotient.push(digit as u64);
                }
            }

            // remainder < target_base, which is a u64
            result.push(remainder as u64);
            working = quotient;
        }

        result.reverse();
        result
    }
}

/// Conversion through a single `BigUint`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntConverter;

impl RadixConverter for BigIntConverter {
    fn convert_normalized(
        &self,
        digits: &[u64],
        target_base: u64,
        source_base: u64,
    ) -> Vec<u64> {
        check_bases(target_base, source_base);

        if digits.is_empty() {
            return Vec::new();
        }

        let source = BigUint::from(source_base);
        let target = BigUint::from(target_base);

        let mut num = BigUint::zero();
        for &digit in digits {
            num *= &source;
            num += BigUint::from(digit);
        }

        let mut result = Vec::new();
        loop {
            let (quotient, remainder) = num.div_rem(&target);
            let digit = remainder.to_u64_digits();
            result.push(digit.first().copied().unwrap_or(0));
            num = quotient;
            if num.is_zero() {
                break;
            }
        }

        result.reverse();
        result
    }
}

/// Names a [`RadixConverter`] strategy so it can be chosen from
/// configuration.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConverterKind {
    /// [`LongDivision`]
    #[default]
    LongDivision,
    /// [`BigIntConverter`]
    #[serde(alias = "bigint")]
    BigInt,
}

impl ConverterKind {
    pub const ALL: [ConverterKind; 2] = [ConverterKind::LongDivision, ConverterKind::BigInt];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterKind::LongDivision => "long_division",
            ConverterKind::BigInt => "big_int",
        }
    }

    /// Instantiates the strategy.
    pub fn build(self) -> Box<dyn RadixConverter> {
        match self {
            ConverterKind::LongDivision => Box::new(LongDivision),
            ConverterKind::BigInt => Box::new(BigIntConverter),
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConverterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long_division" | "long-division" | "simple" => Ok(ConverterKind::LongDivision),
            "big_int" | "big-int" | "bigint" => Ok(ConverterKind::BigInt),
            other => Err(format!(
                "unknown converter '{}', expected one of: long_division, big_int",
                other
            )),
        }
    }
}
