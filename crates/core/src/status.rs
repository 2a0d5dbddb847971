//! Human-readable labels for model class codes.

use core::fmt;

use serde::Serialize;

/// Outcome of the binary "still operating?" model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryStatus {
    Active,
    Closed,
}

impl BinaryStatus {
    /// Class 1 is the positive ("active") class; every other code reads as closed.
    pub fn from_code(code: i64) -> Self {
        if code == 1 { Self::Active } else { Self::Closed }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for BinaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the four-class company model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum CompanyStatus {
    Acquired,
    Operating,
    #[serde(rename = "IPO")]
    Ipo,
    Closed,
    /// The model produced a code outside the known label set.
    Unknown,
}

impl CompanyStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Acquired,
            1 => Self::Operating,
            2 => Self::Ipo,
            3 => Self::Closed,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acquired => "Acquired",
            Self::Operating => "Operating",
            Self::Ipo => "IPO",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
