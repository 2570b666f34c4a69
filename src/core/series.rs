use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::gap::is_gap;
use crate::core::polarity::{MissingSecondaryPolicy, Polarity, resolve_signed_value};
use crate::core::primitives::normalize_non_finite;
use crate::core::table::ColumnSource;
use crate::core::tooltip::{TooltipInfo, TooltipInput, assemble_tooltip};
use crate::core::types::CellValue;
use crate::error::PulseResult;

/// One input row as seen by the series builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub category_index: usize,
    pub category_value: CellValue,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
    pub event_title: Option<String>,
    pub event_description: Option<String>,
}

impl Sample {
    #[must_use]
    pub fn new(category_index: usize, category_value: impl Into<CellValue>) -> Self {
        Self {
            category_index,
            category_value: category_value.into(),
            primary: None,
            secondary: None,
            event_title: None,
            event_description: None,
        }
    }

    #[must_use]
    pub fn with_primary(mut self, value: Option<f64>) -> Self {
        self.primary = value.and_then(normalize_non_finite);
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, value: Option<f64>) -> Self {
        self.secondary = value.and_then(normalize_non_finite);
        self
    }

    #[must_use]
    pub fn with_event(mut self, title: Option<String>, description: Option<String>) -> Self {
        self.event_title = title;
        self.event_description = description;
        self
    }
}

/// Data-label presentation shared by a series and its points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLabelSettings {
    pub show: bool,
    pub label_color: String,
    pub precision: Option<u8>,
}

impl Default for DataLabelSettings {
    fn default() -> Self {
        Self {
            show: false,
            label_color: "#777777".to_owned(),
            precision: None,
        }
    }
}

/// Resolved, renderable unit of a pulse series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category_value: CellValue,
    /// Continuous-axis position: epoch millis for timestamps, raw numbers otherwise.
    pub x: Option<f64>,
    pub category_index: usize,
    pub series_index: usize,
    pub value: f64,
    pub polarity: Polarity,
    pub tooltip: Option<TooltipInfo>,
    pub label_format: Option<String>,
    pub label_fill: String,
    pub key: String,
}

/// Connected run of points. Never empty once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub display_name: Option<String>,
    pub key: String,
    pub line_index: usize,
    pub color: String,
    pub identity: String,
    pub category_source: ColumnSource,
    pub value_source: ColumnSource,
    pub label_settings: DataLabelSettings,
    pub data: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Identity and presentation every series of one grouping shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTemplate {
    pub display_name: Option<String>,
    pub key: String,
    pub identity: String,
    pub line_index: usize,
    pub color: String,
    pub category_source: ColumnSource,
    pub value_source: ColumnSource,
    pub secondary_source: Option<ColumnSource>,
    pub label_settings: DataLabelSettings,
}

impl SeriesTemplate {
    fn emit(&self, data: Vec<DataPoint>) -> Series {
        Series {
            display_name: self.display_name.clone(),
            key: self.key.clone(),
            line_index: self.line_index,
            color: self.color.clone(),
            identity: self.identity.clone(),
            category_source: self.category_source.clone(),
            value_source: self.value_source.clone(),
            label_settings: self.label_settings.clone(),
            data,
        }
    }

    fn point_key(&self, category_index: usize) -> String {
        serde_json::json!({ "ser": self.key, "catIdx": category_index }).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesBuildOptions {
    pub is_scalar: bool,
    pub is_date_mode: bool,
    pub has_secondary_group: bool,
    pub missing_secondary_policy: MissingSecondaryPolicy,
    pub large_value_digits: usize,
}

#[derive(Debug, Default)]
struct BuilderState {
    finished: Vec<Series>,
    current: Vec<DataPoint>,
    last_position: Option<f64>,
}

impl BuilderState {
    fn flush(mut self, template: &SeriesTemplate) -> Self {
        if !self.current.is_empty() {
            let data = std::mem::take(&mut self.current);
            trace!(points = data.len(), "flush pulse series");
            self.finished.push(template.emit(data));
        }
        self
    }

    fn step(
        self,
        sample: Sample,
        template: &SeriesTemplate,
        options: SeriesBuildOptions,
    ) -> PulseResult<Self> {
        let position = sample.category_value.scalar_position();
        let mut state = if is_gap(position, self.last_position, options.is_date_mode) {
            self.flush(template)
        } else {
            self
        };
        state.last_position = position;

        let primary = sample.primary.and_then(normalize_non_finite);
        let secondary = sample.secondary.and_then(normalize_non_finite);

        // Scalar axes never show an isolated dot for a missing sample.
        if options.is_scalar && (sample.category_value.is_null() || primary.is_none()) {
            return Ok(state);
        }

        let resolved = resolve_signed_value(
            primary,
            options.has_secondary_group.then_some(secondary),
            sample.category_index,
            options.missing_secondary_policy,
        )?;

        let value_name = match (resolved.polarity, &template.secondary_source) {
            (Polarity::Secondary, Some(source)) => source.display_name.as_str(),
            _ => template.value_source.display_name.as_str(),
        };
        let category_text = sample.category_value.to_string();
        let tooltip = assemble_tooltip(
            TooltipInput {
                title: sample.event_title.as_deref(),
                description: sample.event_description.as_deref(),
                category_name: &template.category_source.display_name,
                category_text: &category_text,
                value_name,
                value: resolved.value,
            },
            options.large_value_digits,
        );

        state.current.push(DataPoint {
            x: position,
            category_index: sample.category_index,
            series_index: template.line_index,
            value: resolved.value,
            polarity: resolved.polarity,
            tooltip,
            label_format: template.value_source.format.clone(),
            label_fill: template.label_settings.label_color.clone(),
            key: template.point_key(sample.category_index),
            category_value: sample.category_value,
        });
        Ok(state)
    }
}

/// Folds ordered samples into gap-separated series sharing `template`.
///
/// A gap between two known positions closes the running series; the sample
/// that caused it opens the next one. Empty runs are never emitted.
pub fn build_series<I>(
    samples: I,
    template: &SeriesTemplate,
    options: SeriesBuildOptions,
) -> PulseResult<Vec<Series>>
where
    I: IntoIterator<Item = Sample>,
{
    let state = samples
        .into_iter()
        .try_fold(BuilderState::default(), |state, sample| {
            state.step(sample, template, options)
        })?;
    Ok(state.flush(template).finished)
}
