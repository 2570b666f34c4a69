//! pulse-chart: gap-aware pulse series model for tabular time data.
//!
//! The crate turns a categorical view (timestamps, up to two signed value
//! groups, optional event annotations) into time-ordered series split at
//! gaps, plus the axis domains a renderer needs. Drawing, selection and host
//! registration stay outside.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PulseChart, PulseChartConfig, PulseChartData, PulseChartFrame};
pub use error::{PulseError, PulseResult};
