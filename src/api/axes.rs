use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CategoryDomain, ValueDomain, ValueScale, Viewport, calculate_domains};
use crate::error::{PulseError, PulseResult};

use super::config::Margin;
use super::converter::PulseChartData;

/// Plot area left after subtracting margins from the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub viewport: Viewport,
    pub plot: Viewport,
    pub margin: Margin,
}

impl PlotLayout {
    /// Plot size is clamped up to `min_plot_size` on each side. Margins wider
    /// than the viewport leave the minimum size.
    pub fn from_viewport(
        viewport: Viewport,
        margin: Margin,
        min_plot_size: Viewport,
    ) -> PulseResult<Self> {
        if !viewport.is_valid() {
            return Err(PulseError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = viewport
            .width
            .saturating_sub(margin.left.saturating_add(margin.right))
            .max(min_plot_size.width);
        let height = viewport
            .height
            .saturating_sub(margin.top.saturating_add(margin.bottom))
            .max(min_plot_size.height);

        Ok(Self {
            viewport,
            plot: Viewport::new(width, height),
            margin,
        })
    }

    /// Whether the raw viewport is at least as large as `min_plot_size`.
    #[must_use]
    pub fn is_size_available(viewport: Viewport, min_plot_size: Viewport) -> bool {
        viewport.width >= min_plot_size.width && viewport.height >= min_plot_size.height
    }

    /// Vertical offset of the category axis: it runs through the zero line
    /// at the middle of the plot.
    #[must_use]
    pub fn category_axis_offset(self) -> f64 {
        f64::from(self.margin.top) + f64::from(self.plot.height) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxisProperties {
    pub domain: CategoryDomain,
    pub pixel_span: f64,
    pub category_thickness: Option<f64>,
    pub scale: Option<ValueScale>,
    pub format_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisProperties {
    pub domain: Option<ValueDomain>,
    pub pixel_span: f64,
    pub scale: Option<ValueScale>,
    pub format_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesProperties {
    pub x: CategoryAxisProperties,
    pub y: ValueAxisProperties,
}

/// Derives both axes of a converted dataset for the given plot area.
#[must_use]
pub fn calculate_axes(data: &PulseChartData, layout: PlotLayout) -> AxesProperties {
    let domains = calculate_domains(
        &data.series,
        data.category_type(),
        data.is_scalar,
        data.forced_domain,
    );
    let width = f64::from(layout.plot.width);
    let height = f64::from(layout.plot.height);

    let category_thickness = match domains.x {
        CategoryDomain::Ordinal(_) => data
            .series
            .first()
            .filter(|series| !series.is_empty())
            .map(|series| width / series.len() as f64),
        CategoryDomain::Scalar { .. } => None,
    };
    let x_scale = match domains.x {
        CategoryDomain::Scalar { min, max } => scale_or_skip(ValueScale::new(min, max, width)),
        CategoryDomain::Ordinal(_) => None,
    };
    let y_scale = domains.y.and_then(|domain| {
        scale_or_skip(ValueScale::new_vertical(domain.min, domain.max, height))
    });

    let value_format = data
        .series
        .first()
        .and_then(|series| series.value_source.format.clone())
        .or_else(|| data.settings.format_string.clone());

    AxesProperties {
        x: CategoryAxisProperties {
            domain: domains.x,
            pixel_span: width,
            category_thickness,
            scale: x_scale,
            format_string: data.category_metadata.format.clone(),
        },
        y: ValueAxisProperties {
            domain: domains.y,
            pixel_span: height,
            scale: y_scale,
            format_string: value_format,
        },
    }
}

fn scale_or_skip(scale: PulseResult<ValueScale>) -> Option<ValueScale> {
    match scale {
        Ok(scale) => Some(scale),
        Err(err) => {
            debug!(error = %err, "axis has no drawable scale");
            None
        }
    }
}
