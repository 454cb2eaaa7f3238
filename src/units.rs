use crate::error::ParseError;

/// Labels used by the formatter, smallest first.
///
/// The first four carry a leading space and the rest don't. Existing
/// consumers compare against these strings, so keep them as they are.
pub const FORMAT_LABELS: [&str; 8] = [
    " KiB", " MiB", " GiB", " TiB", "PiB", "EiB", "ZiB", "YiB",
];

/// Which multiplier table a unit is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Powers of 1024.
    #[default]
    Binary,
    /// Powers of 1000.
    Decimal,
}

impl Base {
    /// Size of one step between prefixes (1024 or 1000).
    pub fn step(self) -> u64 {
        match self {
            Base::Binary => 1024,
            Base::Decimal => 1000,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = ParseError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        match v {
            2 => Ok(Base::Binary),
            10 => Ok(Base::Decimal),
            base => Err(ParseError::UnsupportedBase { base }),
        }
    }
}

/// Bytes per `unit` in the given base, or `None` for an unknown unit.
///
/// Matching is exact and case-sensitive. A lowercase `b` after the
/// prefix letter means bits (`Kb`, `Mb`, ...); every other spelling of a
/// prefix means bytes.
pub fn multiplier(base: Base, unit: &str) -> Option<f64> {
    let (power, bits) = match unit {
        "b" | "bits" => (0, true),
        "B" | "Bytes" => (0, false),
        "Kb" => (1, true),
        "k" | "K" | "kb" | "KB" | "KiB" | "kib" | "Kib" | "Ki" | "ki" => (1, false),
        "Mb" => (2, true),
        "m" | "M" | "mb" | "MB" | "MiB" | "mib" | "Mib" | "Mi" | "mi" => (2, false),
        "Gb" => (3, true),
        "g" | "G" | "gb" | "GB" | "GiB" | "gib" | "Gib" | "Gi" | "gi" => (3, false),
        "Tb" => (4, true),
        "t" | "T" | "tb" | "TB" | "TiB" | "tib" | "Tib" | "Ti" | "ti" => (4, false),
        "Pb" => (5, true),
        "p" | "P" | "pb" | "PB" | "PiB" | "pib" | "Pib" | "Pi" | "pi" => (5, false),
        "Eb" => (6, true),
        "e" | "E" | "eb" | "EB" | "EiB" | "eib" | "Eib" | "Ei" | "ei" => (6, false),
        _ => return None,
    };

    let bytes = base.step().pow(power) as f64;
    Some(if bits { bytes / 8.0 } else { bytes })
}
