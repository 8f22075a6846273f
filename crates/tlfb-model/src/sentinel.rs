//! Reserved sentinel values carried through flat-record arithmetic.
//!
//! Ordinary answers are non-negative decimal strings. Three reserved numeric
//! values carry meaning instead of magnitude and must survive aggregation
//! without contaminating real sums.

use std::fmt;

/// A reserved non-measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Respondent picked the `----` placeholder (no answer). Encoded `-8888`.
    NoAnswer,
    /// Respondent explicitly answered "Unknown". Encoded `-9999`.
    Unknown,
    /// Two different sentinels collided inside one aggregate. Encoded `-8989`.
    /// Never present in a raw answer; only produced by folding.
    Conflict,
}

impl Sentinel {
    /// Classifies an exact numeric value.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value == -8888.0 {
            Some(Self::NoAnswer)
        } else if value == -9999.0 {
            Some(Self::Unknown)
        } else if value == -8989.0 {
            Some(Self::Conflict)
        } else {
            None
        }
    }

    /// Classifies a normalized column value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-8888" => Some(Self::NoAnswer),
            "-9999" => Some(Self::Unknown),
            "-8989" => Some(Self::Conflict),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::NoAnswer => -8888.0,
            Self::Unknown => -9999.0,
            Self::Conflict => -8989.0,
        }
    }

    /// The integer token written to the flat record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAnswer => "-8888",
            Self::Unknown => "-9999",
            Self::Conflict => "-8989",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
