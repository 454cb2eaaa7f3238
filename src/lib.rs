//! Conversion between human-readable byte sizes ("2.50 GiB") and raw
//! byte counts.

pub mod error;
pub mod field;
pub mod format;
pub mod logging;
pub mod parse;
pub mod units;

pub use error::{ErrorKind, ParseError};
pub use field::{FieldUpdate, SizeField};
pub use format::{format, format_from_gib, format_from_mib, format_signed, scale_binary, ScaledSize};
pub use parse::{parse, parse_str, ParseOptions};
pub use units::Base;
