use serde::{Deserialize, Serialize};

use crate::error::{PulseError, PulseResult};

/// Linear mapping from a value domain onto a pixel span.
///
/// Vertical scales grow upwards, so the domain start lands on the bottom
/// edge of the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_start: f64,
    domain_end: f64,
    pixel_span: f64,
    vertical: bool,
}

impl ValueScale {
    pub fn new(domain_start: f64, domain_end: f64, pixel_span: f64) -> PulseResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PulseError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_span.is_finite() || pixel_span <= 0.0 {
            return Err(PulseError::InvalidData(
                "scale pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_span,
            vertical: false,
        })
    }

    pub fn new_vertical(domain_start: f64, domain_end: f64, pixel_span: f64) -> PulseResult<Self> {
        let mut scale = Self::new(domain_start, domain_end, pixel_span)?;
        scale.vertical = true;
        Ok(scale)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_span(self) -> f64 {
        self.pixel_span
    }

    pub fn domain_to_pixel(self, value: f64) -> PulseResult<f64> {
        if !value.is_finite() {
            return Err(PulseError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        let offset = normalized * self.pixel_span;
        Ok(if self.vertical {
            self.pixel_span - offset
        } else {
            offset
        })
    }

    pub fn pixel_to_domain(self, pixel: f64) -> PulseResult<f64> {
        if !pixel.is_finite() {
            return Err(PulseError::InvalidData("pixel must be finite".to_owned()));
        }

        let offset = if self.vertical {
            self.pixel_span - pixel
        } else {
            pixel
        };
        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + offset / self.pixel_span * span)
    }
}
