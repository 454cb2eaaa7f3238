use std::fmt;

use crate::units::FORMAT_LABELS;

pub const KIB: f64 = 1024.0;
pub const MIB: f64 = KIB * 1024.0;
pub const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;
const EIB: f64 = PIB * 1024.0;

/// Human-readable size in binary units, e.g. `"2.50 GiB"`.
///
/// Always divides at least once, so anything below 1 KiB comes out as a
/// fraction of a KiB. The sign is dropped; use [`format_signed`] to keep it.
/// Values past YiB stay in YiB.
pub fn format(bytes: f64) -> String {
    let last = FORMAT_LABELS.len() - 1;

    let mut value = bytes.abs() / KIB;
    let mut i = 0usize;
    while value >= KIB && i < last {
        value /= KIB;
        i += 1;
    }

    // also swallows NaN
    let value = round_ties_up(value.max(0.0));
    format!("{:.2}{}", value, FORMAT_LABELS[i])
}

// `{:.2}` breaks exact hundredth ties toward even; callers expect them
// rounded up (0.125 -> "0.13"). A finite double sits exactly on such a
// tie only when it is an odd number of eighths.
fn round_ties_up(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (value * 100.0).ceil() / 100.0
    } else {
        value
    }
}

/// Like [`format`], with an explicit `+` or `-` in front.
pub fn format_signed(bytes: f64) -> String {
    let sign = if bytes >= 0.0 { '+' } else { '-' };
    format!("{sign}{}", format(bytes))
}

/// [`format`] for a quantity already expressed in GiB.
pub fn format_from_gib(gib: f64) -> String {
    format(gib * GIB)
}

/// [`format`] for a quantity already expressed in MiB.
pub fn format_from_mib(mib: f64) -> String {
    format(mib * MIB)
}

/// A byte count scaled to the largest binary unit it reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSize {
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for ScaledSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Scale `num` to a reasonable power of two, keeping its sign.
///
/// Stops at EiB; anything under 1 KiB is left as plain `bytes`.
pub fn scale_binary(num: f64) -> ScaledSize {
    const STEPS: [(f64, &str); 6] = [
        (EIB, "EiB"),
        (PIB, "PiB"),
        (TIB, "TiB"),
        (GIB, "GiB"),
        (MIB, "MiB"),
        (KIB, "KiB"),
    ];

    let abs = num.abs();
    for (threshold, unit) in STEPS {
        if abs >= threshold {
            return ScaledSize {
                value: num / threshold,
                unit,
            };
        }
    }

    ScaledSize {
        value: num,
        unit: "bytes",
    }
}
