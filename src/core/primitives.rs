use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PulseError, PulseResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PulseResult<f64> {
    value.to_f64().ok_or_else(|| {
        PulseError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Maps NaN and infinities to `None` so they behave like missing samples.
#[must_use]
pub fn normalize_non_finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
