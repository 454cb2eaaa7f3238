use std::fmt;

use crate::error::ParseError;
use crate::units::{self, Base};

/// Knobs for [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// 2 or 10. `None` and `0` mean binary.
    pub base: Option<u32>,
}

impl ParseOptions {
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }

    fn resolve_base(&self) -> Result<Base, ParseError> {
        match self.base {
            None | Some(0) => Ok(Base::default()),
            Some(b) => Base::try_from(b),
        }
    }
}

/// Parse a human size such as `"1.5 GiB"`, `"512k"`, `"10,5 MB"` or `"500"`
/// into a whole number of bytes.
///
/// A missing unit means bytes. Decimal separators may be `.` or `,`.
/// Units are case-sensitive; see [`units::multiplier`].
pub fn parse(input: impl fmt::Display, options: &ParseOptions) -> Result<u64, ParseError> {
    let input = input.to_string();

    match parse_inner(&input, options) {
        Ok(bytes) => {
            tracing::trace!(input = %input, bytes, "parsed size");
            Ok(bytes)
        }
        Err(e) => {
            tracing::debug!(input = %input, error = %e, "failed to parse size");
            Err(e)
        }
    }
}

/// [`parse`] with default options (binary base).
pub fn parse_str(input: &str) -> Result<u64, ParseError> {
    parse(input, &ParseOptions::default())
}

fn parse_inner(input: &str, options: &ParseOptions) -> Result<u64, ParseError> {
    let (amount, unit) = split_amount_unit(input);
    let amount = amount.replacen(',', ".", 1);

    let Some(value) = valid_amount(&amount) else {
        return Err(ParseError::UnparsableAmount {
            input: input.to_string(),
        });
    };
    if !parsable_unit(unit) {
        return Err(ParseError::UnparsableUnit {
            input: input.to_string(),
        });
    }

    if unit.is_empty() {
        return to_bytes(value, input);
    }

    let base = options.resolve_base()?;
    match units::multiplier(base, unit) {
        Some(mult) => to_bytes(value * mult, input),
        None => Err(ParseError::UnknownUnit {
            unit: unit.to_string(),
        }),
    }
}

/// Split into the leading run of digits/separators and whatever follows,
/// skipping whitespace in between.
fn split_amount_unit(s: &str) -> (&str, &str) {
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(s.len());

    let (amount, rest) = s.split_at(split);
    (amount, rest.trim_start())
}

fn valid_amount(amount: &str) -> Option<f64> {
    amount.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Digits in the unit mean the split went wrong ("1 5", "1.5.3 KiB" is
// caught by the amount check instead).
fn parsable_unit(unit: &str) -> bool {
    !unit.chars().any(|c| c.is_ascii_digit())
}

fn to_bytes(value: f64, input: &str) -> Result<u64, ParseError> {
    let rounded = value.round();
    if rounded >= u64::MAX as f64 {
        return Err(ParseError::Overflow {
            input: input.to_string(),
        });
    }
    Ok(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn decimal() -> ParseOptions {
        ParseOptions::default().with_base(10)
    }

    #[test]
    fn split_skips_whitespace_between_parts() {
        assert_eq!(split_amount_unit("1.5 GiB"), ("1.5", "GiB"));
        assert_eq!(split_amount_unit("1.5\tGiB"), ("1.5", "GiB"));
        assert_eq!(split_amount_unit("10,5MB"), ("10,5", "MB"));
        assert_eq!(split_amount_unit("500"), ("500", ""));
        assert_eq!(split_amount_unit("abc MB"), ("", "abc MB"));
        assert_eq!(split_amount_unit("1 KiB "), ("1", "KiB "));
    }

    #[test]
    fn plain_numbers_are_bytes() {
        assert_eq!(parse_str("500"), Ok(500));
        assert_eq!(parse_str("0"), Ok(0));
        assert_eq!(parse_str("2.5"), Ok(3));
        assert_eq!(parse_str("2.4"), Ok(2));
        assert_eq!(parse_str("1."), Ok(1));
        assert_eq!(parse_str(".5"), Ok(1));
    }

    #[test]
    fn binary_and_decimal_tables() {
        assert_eq!(parse_str("1 KiB"), Ok(1024));
        assert_eq!(parse("1 KiB", &decimal()), Ok(1000));
        assert_eq!(parse_str("1.5 GiB"), Ok(1_610_612_736));
        assert_eq!(parse("2 TB", &decimal()), Ok(2_000_000_000_000));
        assert_eq!(parse_str("3k"), Ok(3072));
    }

    #[test]
    fn bits_and_bytes() {
        assert_eq!(parse_str("8 b"), Ok(1));
        assert_eq!(parse_str("12 bits"), Ok(2));
        assert_eq!(parse_str("1 Kb"), Ok(128));
        assert_eq!(parse_str("1 KB"), Ok(1024));
        assert_eq!(parse("1 Gb", &decimal()), Ok(125_000_000));
        assert_eq!(parse_str("1 Gb"), Ok(134_217_728));
    }

    #[test]
    fn comma_is_a_decimal_separator() {
        assert_eq!(parse_str("1,5 KiB"), Ok(1536));
        // only the first comma is rewritten
        assert_eq!(
            parse_str("1,000,000").map_err(|e| e.kind()),
            Err(ErrorKind::UnparsableAmount)
        );
    }

    #[test]
    fn bad_amount() {
        let e = parse_str("abc MB").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnparsableAmount);
        assert_eq!(e.to_string(), "Can't interpret abc MB");

        let e = parse_str("").unwrap_err();
        assert_eq!(e.to_string(), "Can't interpret a blank string");

        assert_eq!(
            parse_str("1.2.3 KiB").unwrap_err().kind(),
            ErrorKind::UnparsableAmount
        );
        assert_eq!(parse_str(".").unwrap_err().kind(), ErrorKind::UnparsableAmount);
    }

    #[test]
    fn digits_in_unit() {
        let e = parse_str("1 5").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnparsableUnit);
        assert_eq!(e.to_string(), "Can't interpret 1 5");

        assert_eq!(parse_str("1 K2").unwrap_err().kind(), ErrorKind::UnparsableUnit);
    }

    #[test]
    fn unknown_unit() {
        let e = parse_str("5 Foo").unwrap_err();
        assert_eq!(e, ParseError::UnknownUnit { unit: "Foo".into() });
        assert_eq!(e.to_string(), "Foo doesn't appear to be a valid unit");

        assert_eq!(parse_str("1 kIB").unwrap_err().kind(), ErrorKind::UnknownUnit);
        assert_eq!(parse_str("1 KiB ").unwrap_err().kind(), ErrorKind::UnknownUnit);
    }

    #[test]
    fn base_is_checked_only_for_units() {
        let opts = ParseOptions::default().with_base(16);
        assert_eq!(parse("42", &opts), Ok(42));
        assert_eq!(
            parse("42 K", &opts),
            Err(ParseError::UnsupportedBase { base: 16 })
        );
    }

    #[test]
    fn zero_base_falls_back_to_binary() {
        let opts = ParseOptions::default().with_base(0);
        assert_eq!(parse("1 KiB", &opts), Ok(1024));
        assert_eq!(parse("2 Gb", &opts), parse_str("2 Gb"));
    }

    #[test]
    fn explicit_binary_base_matches_default() {
        let binary = ParseOptions::default().with_base(2);
        for input in ["1 KiB", "1.5 G", "7 Mb", "500", "x", "5 Foo", "3 bits"] {
            assert_eq!(parse(input, &binary), parse_str(input), "{input}");
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            parse_str("16 EiB").unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(parse_str("15 EiB"), Ok(15 * (1u64 << 60)));
    }

    #[test]
    fn accepts_non_string_input() {
        assert_eq!(parse(4096u32, &ParseOptions::default()), Ok(4096));
        assert_eq!(parse(1.5f64, &ParseOptions::default()), Ok(2));
    }
}
