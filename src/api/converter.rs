use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{
    CellValue, Column, ColumnSource, DataLabelSettings, DataRole, ForcedDomain, PolarityPair,
    RoleIndices, Sample, Series, SeriesBuildOptions, SeriesTemplate, TabularView, ValueType,
    build_series,
};
use crate::error::{PulseError, PulseResult};

use super::PulseChartConfig;
use super::settings::{
    PulseChartSettings, category_axis_overrides, extract_settings, resolve_is_scalar,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AxesLabels {
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Renderable pulse dataset produced by one conversion.
///
/// Never mutated after construction; each update builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseChartData {
    pub series: Vec<Series>,
    pub is_scalar: bool,
    pub is_date_mode: bool,
    pub category_metadata: ColumnSource,
    pub categories: Vec<CellValue>,
    pub has_dynamic_series: bool,
    pub axes_labels: AxesLabels,
    pub data_labels_settings: DataLabelSettings,
    pub forced_domain: ForcedDomain,
    pub settings: PulseChartSettings,
}

impl PulseChartData {
    #[must_use]
    pub fn category_type(&self) -> ValueType {
        self.category_metadata.value_type
    }

    /// Total number of points across every series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

/// Converts a tabular view, absorbing every failure into `None`.
#[must_use]
pub fn convert(view: &TabularView, config: &PulseChartConfig) -> Option<PulseChartData> {
    match try_convert(view, config) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!(error = %err, "pulse conversion produced no dataset");
            None
        }
    }
}

/// Converts a tabular view into gap-segmented pulse series.
pub fn try_convert(view: &TabularView, config: &PulseChartConfig) -> PulseResult<PulseChartData> {
    if view.categories.is_empty() {
        return Err(PulseError::EmptyInput("no categorical data".to_owned()));
    }

    let roles = RoleIndices::resolve(&view.categories).ok_or(PulseError::MissingRequiredRole {
        role: DataRole::Timestamp.as_str(),
    })?;
    let category = &view.categories[roles.timestamp];
    if category.values.is_empty() {
        return Err(PulseError::EmptyInput("timestamp column has no values".to_owned()));
    }

    let pair = PolarityPair::from_groups(&view.grouped_values)?;
    let primary_measure = pair.primary_measure()?;
    let secondary_measure = pair.secondary_measure();

    let objects = view.objects();
    let settings = extract_settings(objects);
    let axis = category_axis_overrides(objects);
    let category_type = category.source.value_type;
    let is_scalar = resolve_is_scalar(config.scalar_requested, &axis, category_type);
    let is_date_mode = category_type.is_date_time();
    debug!(
        categories = category.values.len(),
        is_scalar,
        is_date_mode,
        has_secondary = secondary_measure.is_some(),
        "converting pulse view"
    );

    let data_labels_settings = DataLabelSettings {
        precision: settings.precision,
        ..DataLabelSettings::default()
    };
    let template = SeriesTemplate {
        display_name: pair.primary.name.clone(),
        key: serde_json::json!({
            "selector": pair.primary.identity,
            "measure": primary_measure.source.query_name,
        })
        .to_string(),
        identity: pair.primary.identity.clone(),
        line_index: 0,
        color: settings.series_color(),
        category_source: category.source.clone(),
        value_source: primary_measure.source.clone(),
        secondary_source: secondary_measure.map(|column| column.source.clone()),
        label_settings: data_labels_settings.clone(),
    };
    let options = SeriesBuildOptions {
        is_scalar,
        is_date_mode,
        has_secondary_group: secondary_measure.is_some(),
        missing_secondary_policy: config.missing_secondary_policy,
        large_value_digits: config.large_value_digits,
    };

    let title_column = roles.event_title.map(|index| &view.categories[index]);
    let description_column = roles.event_description.map(|index| &view.categories[index]);
    let samples = category
        .values
        .iter()
        .enumerate()
        .map(|(index, category_value)| Sample {
            category_index: index,
            category_value: category_value.clone(),
            primary: primary_measure.cell(index).as_number(),
            secondary: secondary_measure.and_then(|column| column.cell(index).as_number()),
            event_title: annotation(title_column, index),
            event_description: annotation(description_column, index),
        });
    let series = build_series(samples, &template, options)?;
    debug!(series = series.len(), "built pulse series");

    Ok(PulseChartData {
        axes_labels: axes_labels(&category.source, primary_measure, secondary_measure),
        series,
        is_scalar,
        is_date_mode,
        category_metadata: category.source.clone(),
        categories: category.values.clone(),
        has_dynamic_series: true,
        data_labels_settings,
        forced_domain: ForcedDomain {
            start: axis.start,
            end: axis.end,
        },
        settings,
    })
}

fn annotation(column: Option<&Column>, index: usize) -> Option<String> {
    column.and_then(|column| column.cell(index).as_annotation())
}

fn axes_labels(category: &ColumnSource, primary: &Column, secondary: Option<&Column>) -> AxesLabels {
    let mut names: SmallVec<[&str; 2]> = SmallVec::new();
    for column in std::iter::once(primary).chain(secondary) {
        let name = column.source.display_name.as_str();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }

    AxesLabels {
        x: (!category.display_name.is_empty()).then(|| category.display_name.clone()),
        y: (!names.is_empty()).then(|| names.join(", ")),
    }
}
