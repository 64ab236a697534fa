use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use thiserror::Error;

#[cfg(test)]
#[path = "./quantity.tests.rs"]
mod quantity_tests;

const BINARY_UNITS: [(&str, i64); 5] = [
    ("Pi", 1 << 50),
    ("Ti", 1 << 40),
    ("Gi", 1 << 30),
    ("Mi", 1 << 20),
    ("Ki", 1 << 10),
];

const DECIMAL_UNITS: [(&str, i64); 5] = [
    ("PB", 1_000_000_000_000_000),
    ("TB", 1_000_000_000_000),
    ("GB", 1_000_000_000),
    ("MB", 1_000_000),
    ("KB", 1_000),
];

/// Possible errors from parsing Kubernetes quantity strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantity string is empty.
    #[error("quantity string is empty")]
    Empty,

    /// Quantity has no valid numeric part.
    #[error("quantity has no valid numeric part")]
    InvalidNumber,

    /// Quantity has an unrecognized unit suffix.
    #[error("unknown quantity suffix '{0}'")]
    UnknownSuffix(String),
}

/// CPU quantity held as nanocores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CpuQuantity {
    pub value: i64,
}

impl CpuQuantity {
    /// Truncates the quantity to whole millicores.
    pub fn millicores(self) -> Self {
        Self {
            value: (self.value / 1_000_000) * 1_000_000,
        }
    }
}

impl FromStr for CpuQuantity {
    type Err = QuantityError;

    /// Parses Kubernetes CPU strings like `2`, `500m`, `250000u` or `1500000n`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (number, suffix) = split_quantity(value)?;
        let multiplier = match suffix.to_ascii_lowercase().as_str() {
            "" => 1_000_000_000,
            "m" => 1_000_000,
            "u" => 1_000,
            "n" => 1,
            _ => return Err(QuantityError::UnknownSuffix(suffix.to_owned())),
        };

        Ok(Self {
            value: scaled(number, multiplier)?,
        })
    }
}

impl fmt::Display for CpuQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value != 0 && self.value % 1_000_000_000 == 0 {
            write!(f, "{}", self.value / 1_000_000_000)
        } else if self.value != 0 && self.value % 1_000_000 == 0 {
            write!(f, "{}m", self.value / 1_000_000)
        } else {
            write!(f, "{}n", self.value)
        }
    }
}

impl Add for CpuQuantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            value: self.value + other.value,
        }
    }
}

/// Memory quantity held as bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemoryQuantity {
    pub value: i64,
}

impl FromStr for MemoryQuantity {
    type Err = QuantityError;

    /// Parses Kubernetes memory strings with binary (`Ki`, `Mi`, ...) or
    /// decimal (`KB`, `GB`, ...) suffixes; a bare number means bytes.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (number, suffix) = split_quantity(value)?;
        let multiplier = match suffix.to_ascii_lowercase().as_str() {
            "" | "b" => 1,
            "ki" | "kib" => 1 << 10,
            "mi" | "mib" => 1 << 20,
            "gi" | "gib" => 1 << 30,
            "ti" | "tib" => 1 << 40,
            "pi" | "pib" => 1 << 50,
            "k" | "kb" => 1_000,
            "m" | "mb" => 1_000_000,
            "g" | "gb" => 1_000_000_000,
            "t" | "tb" => 1_000_000_000_000,
            "p" | "pb" => 1_000_000_000_000_000,
            _ => return Err(QuantityError::UnknownSuffix(suffix.to_owned())),
        };

        Ok(Self {
            value: scaled(number, multiplier)?,
        })
    }
}

impl fmt::Display for MemoryQuantity {
    /// Renders the largest unit that represents the value exactly, preferring
    /// binary units, and falls back to plain bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (suffix, unit) in BINARY_UNITS {
            if self.value != 0 && self.value % unit == 0 {
                return write!(f, "{}{}", self.value / unit, suffix);
            }
        }

        for (suffix, unit) in DECIMAL_UNITS {
            if self.value != 0 && self.value % unit == 0 {
                return write!(f, "{}{}", self.value / unit, suffix);
            }
        }

        write!(f, "{}B", self.value)
    }
}

impl Add for MemoryQuantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            value: self.value + other.value,
        }
    }
}

/// Splits a quantity string into its numeric part and unit suffix.
fn split_quantity(value: &str) -> Result<(&str, &str), QuantityError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(QuantityError::Empty);
    }

    let suffix_start = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());

    Ok(value.split_at(suffix_start))
}

/// Parses the numeric part and applies the unit multiplier.
fn scaled(number: &str, multiplier: i64) -> Result<i64, QuantityError> {
    let number = number.parse::<f64>().map_err(|_| QuantityError::InvalidNumber)?;
    Ok((number * multiplier as f64).round() as i64)
}
