//! Number formatting for formula results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an average is rounded to two decimal places when it falls exactly
/// halfway between two representable values.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// 0.125 -> 0.13, -0.125 -> -0.13.
    #[default]
    HalfAwayFromZero,
    /// 0.125 -> 0.12, 0.135 -> 0.14 (banker's rounding).
    HalfEven,
}

impl Rounding {
    pub fn name(&self) -> &'static str {
        match self {
            Rounding::HalfAwayFromZero => "half-away-from-zero",
            Rounding::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half-away-from-zero" => Ok(Rounding::HalfAwayFromZero),
            "half-even" => Ok(Rounding::HalfEven),
            other => Err(format!(
                "Unknown rounding '{}' (expected half-away-from-zero or half-even)",
                other
            )),
        }
    }
}

/// Format `sum / count` with exactly two decimals.
///
/// The quotient is rounded on the exact rational value, so ties are real ties
/// and not artifacts of binary floating point. `count` must be non-zero.
pub fn format_mean(sum: i128, count: u64, rounding: Rounding) -> String {
    debug_assert!(count > 0);
    let numerator = sum * 100;
    let denominator = i128::from(count);

    let mut hundredths = numerator / denominator;
    let remainder = (numerator % denominator).abs();
    let away = match (remainder * 2).cmp(&denominator) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => match rounding {
            Rounding::HalfAwayFromZero => true,
            Rounding::HalfEven => hundredths % 2 != 0,
        },
    };
    if away {
        hundredths += numerator.signum();
    }

    let sign = if hundredths < 0 { "-" } else { "" };
    let magnitude = hundredths.unsigned_abs();
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}
