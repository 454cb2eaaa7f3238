use thiserror::Error;

/// Why a size string could not be turned into a byte count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The leading numeric part is missing or not a finite number.
    #[error("Can't interpret {}", blank_or(.input))]
    UnparsableAmount { input: String },

    /// The unit part contains digits, so the split went wrong.
    #[error("Can't interpret {}", blank_or(.input))]
    UnparsableUnit { input: String },

    /// Well-formed unit that no table entry knows about.
    #[error("{unit} doesn't appear to be a valid unit")]
    UnknownUnit { unit: String },

    #[error("unsupported base {base} (expected 2 or 10)")]
    UnsupportedBase { base: u32 },

    #[error("{input} does not fit in a 64-bit byte count")]
    Overflow { input: String },
}

/// Reason code for a [`ParseError`], for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnparsableAmount,
    UnparsableUnit,
    UnknownUnit,
    UnsupportedBase,
    Overflow,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnparsableAmount { .. } => ErrorKind::UnparsableAmount,
            ParseError::UnparsableUnit { .. } => ErrorKind::UnparsableUnit,
            ParseError::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            ParseError::UnsupportedBase { .. } => ErrorKind::UnsupportedBase,
            ParseError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

fn blank_or(input: &str) -> &str {
    if input.is_empty() {
        "a blank string"
    } else {
        input
    }
}
