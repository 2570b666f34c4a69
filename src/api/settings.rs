use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{MetadataObjects, ValueType};

/// Line color used when metadata carries no fill.
pub const DEFAULT_SERIES_COLOR: &str = "#3779B7";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
    Right,
    Left,
    TopCenter,
    BottomCenter,
    RightCenter,
    LeftCenter,
}

impl LegendPosition {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Top" => Some(Self::Top),
            "Bottom" => Some(Self::Bottom),
            "Right" => Some(Self::Right),
            "Left" => Some(Self::Left),
            "TopCenter" => Some(Self::TopCenter),
            "BottomCenter" => Some(Self::BottomCenter),
            "RightCenter" => Some(Self::RightCenter),
            "LeftCenter" => Some(Self::LeftCenter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LegendSettings {
    pub show: Option<bool>,
    pub show_title: Option<bool>,
    pub title_text: Option<String>,
    pub position: Option<LegendPosition>,
}

/// Presentation settings recognized in the host's metadata objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PulseChartSettings {
    pub format_string: Option<String>,
    pub background_color: Option<String>,
    pub default_color: Option<String>,
    pub fill_color: Option<String>,
    pub precision: Option<u8>,
    pub legend: Option<LegendSettings>,
}

impl PulseChartSettings {
    /// Explicit fill, then the default color, then the built-in line color.
    #[must_use]
    pub fn series_color(&self) -> String {
        self.fill_color
            .as_deref()
            .or(self.default_color.as_deref())
            .unwrap_or(DEFAULT_SERIES_COLOR)
            .to_owned()
    }
}

/// Copies recognized fields out of optional metadata objects.
///
/// Missing objects and ill-typed properties fall back to defaults.
#[must_use]
pub fn extract_settings(objects: Option<&MetadataObjects>) -> PulseChartSettings {
    let Some(objects) = objects else {
        return PulseChartSettings::default();
    };

    let legend = objects.get("legend").map(|_| LegendSettings {
        show: bool_property(objects, "legend", "show"),
        show_title: bool_property(objects, "legend", "showTitle"),
        title_text: string_property(objects, "legend", "titleText"),
        position: string_property(objects, "legend", "position")
            .as_deref()
            .and_then(LegendPosition::from_name),
    });

    PulseChartSettings {
        format_string: string_property(objects, "general", "formatString"),
        background_color: fill_property(objects, "general", "fill"),
        default_color: fill_property(objects, "dataPoint", "defaultColor"),
        fill_color: fill_property(objects, "dataPoint", "fill"),
        precision: number_property(objects, "labels", "labelPrecision")
            .filter(|value| *value >= 0.0)
            .map(|value| value.round().min(f64::from(u8::MAX)) as u8),
        legend,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisType {
    Scalar,
    Categorical,
}

/// Category-axis overrides from the `categoryAxis` metadata object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryAxisOverrides {
    pub axis_type: Option<AxisType>,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

#[must_use]
pub fn category_axis_overrides(objects: Option<&MetadataObjects>) -> CategoryAxisOverrides {
    let Some(objects) = objects else {
        return CategoryAxisOverrides::default();
    };

    CategoryAxisOverrides {
        axis_type: string_property(objects, "categoryAxis", "axisType").and_then(|name| {
            match name.as_str() {
                "Scalar" => Some(AxisType::Scalar),
                "Categorical" => Some(AxisType::Categorical),
                _ => None,
            }
        }),
        start: number_property(objects, "categoryAxis", "start"),
        end: number_property(objects, "categoryAxis", "end"),
    }
}

/// Ordinal category types always win; then an explicit axis type; then the
/// host's request.
#[must_use]
pub fn resolve_is_scalar(
    requested: bool,
    axis: &CategoryAxisOverrides,
    category_type: ValueType,
) -> bool {
    if category_type.is_ordinal() {
        return false;
    }
    match axis.axis_type {
        Some(axis_type) => axis_type == AxisType::Scalar,
        None => requested,
    }
}

fn property<'a>(objects: &'a MetadataObjects, object: &str, name: &str) -> Option<&'a Value> {
    objects.get(object)?.get(name)
}

fn bool_property(objects: &MetadataObjects, object: &str, name: &str) -> Option<bool> {
    property(objects, object, name)?.as_bool()
}

fn string_property(objects: &MetadataObjects, object: &str, name: &str) -> Option<String> {
    property(objects, object, name)?.as_str().map(str::to_owned)
}

fn number_property(objects: &MetadataObjects, object: &str, name: &str) -> Option<f64> {
    property(objects, object, name)?
        .as_f64()
        .filter(|value| value.is_finite())
}

// Fills arrive either as a bare color string or as `{ "solid": { "color": .. } }`.
fn fill_property(objects: &MetadataObjects, object: &str, name: &str) -> Option<String> {
    let value = property(objects, object, name)?;
    value
        .as_str()
        .or_else(|| value.pointer("/solid/color")?.as_str())
        .map(str::to_owned)
}
