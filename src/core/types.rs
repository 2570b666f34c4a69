use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64, normalize_non_finite};
use crate::error::PulseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Logical type of a column's values as declared by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueType {
    DateTime,
    #[default]
    Numeric,
    Text,
    Bool,
}

impl ValueType {
    /// Text and boolean categories can only be laid out positionally.
    #[must_use]
    pub fn is_ordinal(self) -> bool {
        matches!(self, Self::Text | Self::Bool)
    }

    #[must_use]
    pub fn is_date_time(self) -> bool {
        matches!(self, Self::DateTime)
    }
}

/// A single raw cell of a tabular column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum CellValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl CellValue {
    pub fn from_decimal(value: Decimal) -> PulseResult<Self> {
        Ok(Self::Number(decimal_to_f64(value, "cell value")?))
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::DateTime(time)
    }

    /// Treats non-finite numbers as missing.
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Number(value) => !value.is_finite(),
            _ => false,
        }
    }

    /// Finite numeric reading of the cell; anything else is absent.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => normalize_non_finite(*value),
            _ => None,
        }
    }

    /// Position of the cell on a continuous axis: epoch millis for
    /// timestamps, the raw value for finite numbers.
    #[must_use]
    pub fn scalar_position(&self) -> Option<f64> {
        match self {
            Self::DateTime(time) => Some(datetime_to_unix_millis(*time)),
            Self::Number(value) => normalize_non_finite(*value),
            _ => None,
        }
    }

    /// Text content used for annotation columns.
    ///
    /// Falsy cells count as absent: empty text, zero, `false` and non-finite
    /// numbers.
    #[must_use]
    pub fn as_annotation(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bool(false) => None,
            Self::Text(text) if text.is_empty() => None,
            Self::Number(value) if *value == 0.0 || !value.is_finite() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
            Self::DateTime(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}
