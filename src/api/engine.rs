use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{TabularView, Viewport};
use crate::error::{PulseError, PulseResult};

use super::axes::{AxesProperties, PlotLayout, calculate_axes};
use super::config::PulseChartConfig;
use super::converter::{PulseChartData, try_convert};

/// Everything a renderer needs for one update: dataset, axes, layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseChartFrame {
    pub data: PulseChartData,
    pub axes: AxesProperties,
    pub layout: PlotLayout,
}

impl PulseChartFrame {
    /// Runs the full pipeline for one view and viewport.
    pub fn build(
        view: &TabularView,
        viewport: Viewport,
        config: &PulseChartConfig,
    ) -> PulseResult<Self> {
        let layout = PlotLayout::from_viewport(viewport, config.margin, config.min_plot_size)?;
        let data = try_convert(view, config)?;
        let axes = calculate_axes(&data, layout);
        Ok(Self { data, axes, layout })
    }

    pub fn to_json_pretty(&self) -> PulseResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PulseError::InvalidData(format!("failed to serialize frame: {e}")))
    }

    pub fn from_json_str(input: &str) -> PulseResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PulseError::InvalidData(format!("failed to parse frame: {e}")))
    }
}

/// Update-driven pulse chart model.
///
/// Every update recomputes a fresh frame and swaps the shared reference;
/// readers holding an older `Arc` keep a consistent snapshot.
#[derive(Debug, Default)]
pub struct PulseChart {
    config: PulseChartConfig,
    frame: Option<Arc<PulseChartFrame>>,
}

impl PulseChart {
    #[must_use]
    pub fn new(config: PulseChartConfig) -> Self {
        Self {
            config,
            frame: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PulseChartConfig {
        &self.config
    }

    /// Replaces the config. Takes effect on the next update.
    pub fn set_config(&mut self, config: PulseChartConfig) {
        self.config = config;
    }

    /// Recomputes the frame, clearing it when the view cannot be rendered.
    pub fn update(
        &mut self,
        view: &TabularView,
        viewport: Viewport,
    ) -> Option<Arc<PulseChartFrame>> {
        self.frame = match PulseChartFrame::build(view, viewport, &self.config) {
            Ok(frame) => {
                debug!(
                    series = frame.data.series.len(),
                    points = frame.data.point_count(),
                    width = viewport.width,
                    height = viewport.height,
                    "pulse chart updated"
                );
                Some(Arc::new(frame))
            }
            Err(err) => {
                warn!(error = %err, "pulse chart cleared");
                None
            }
        };
        self.frame()
    }

    #[must_use]
    pub fn frame(&self) -> Option<Arc<PulseChartFrame>> {
        self.frame.clone()
    }

    pub fn clear(&mut self) {
        self.frame = None;
    }
}
