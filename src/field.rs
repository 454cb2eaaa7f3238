use crate::error::ParseError;
use crate::format::{format, format_signed};
use crate::parse::{parse, ParseOptions};

/// A size input field: a raw byte value edited through its human form,
/// with the change shown against the value it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeField {
    raw: u64,
    baseline: u64,
}

/// Result of feeding new text into a [`SizeField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub raw: u64,
    pub delta: i128,
    pub delta_display: String,
}

impl SizeField {
    pub fn new(raw: u64, baseline: u64) -> Self {
        Self { raw, baseline }
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn baseline(&self) -> u64 {
        self.baseline
    }

    /// Human text to pre-fill the field with.
    pub fn display(&self) -> String {
        format(self.raw as f64)
    }

    /// Re-parse the human text. On error the raw value is left alone.
    pub fn update(&mut self, input: &str, options: &ParseOptions) -> Result<FieldUpdate, ParseError> {
        let raw = parse(input, options)?;
        self.raw = raw;

        let delta = i128::from(raw) - i128::from(self.baseline);
        tracing::debug!(raw, baseline = self.baseline, delta = %delta, "field updated");

        Ok(FieldUpdate {
            raw,
            delta,
            delta_display: format_signed(delta as f64),
        })
    }
}
