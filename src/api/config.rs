use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LARGE_VALUE_DIGITS, MissingSecondaryPolicy, Viewport};
use crate::error::{PulseError, PulseResult};

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub right: u32,
    pub left: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 70,
            bottom: 70,
            right: 20,
            left: 10,
        }
    }
}

/// Host-side configuration of the pulse pipeline.
///
/// Serializable so hosts can persist it next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseChartConfig {
    #[serde(default)]
    pub scalar_requested: bool,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_min_plot_size")]
    pub min_plot_size: Viewport,
    #[serde(default)]
    pub missing_secondary_policy: MissingSecondaryPolicy,
    #[serde(default = "default_large_value_digits")]
    pub large_value_digits: usize,
}

impl Default for PulseChartConfig {
    fn default() -> Self {
        Self {
            scalar_requested: false,
            margin: Margin::default(),
            min_plot_size: default_min_plot_size(),
            missing_secondary_policy: MissingSecondaryPolicy::default(),
            large_value_digits: default_large_value_digits(),
        }
    }
}

impl PulseChartConfig {
    /// Requests a continuous category axis when the data allows it.
    #[must_use]
    pub fn with_scalar_requested(mut self, scalar_requested: bool) -> Self {
        self.scalar_requested = scalar_requested;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_min_plot_size(mut self, min_plot_size: Viewport) -> Self {
        self.min_plot_size = min_plot_size;
        self
    }

    #[must_use]
    pub fn with_missing_secondary_policy(mut self, policy: MissingSecondaryPolicy) -> Self {
        self.missing_secondary_policy = policy;
        self
    }

    #[must_use]
    pub fn with_large_value_digits(mut self, digits: usize) -> Self {
        self.large_value_digits = digits;
        self
    }

    pub fn to_json_pretty(self) -> PulseResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PulseError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PulseResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PulseError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_min_plot_size() -> Viewport {
    Viewport::new(50, 50)
}

fn default_large_value_digits() -> usize {
    DEFAULT_LARGE_VALUE_DIGITS
}
