mod axes;
mod config;
mod converter;
mod engine;
mod settings;

pub use axes::{
    AxesProperties, CategoryAxisProperties, PlotLayout, ValueAxisProperties, calculate_axes,
};
pub use config::{Margin, PulseChartConfig};
pub use converter::{AxesLabels, PulseChartData, convert, try_convert};
pub use engine::{PulseChart, PulseChartFrame};
pub use settings::{
    AxisType, CategoryAxisOverrides, DEFAULT_SERIES_COLOR, LegendPosition, LegendSettings,
    PulseChartSettings, category_axis_overrides, extract_settings, resolve_is_scalar,
};
