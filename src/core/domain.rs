use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::series::Series;
use crate::core::types::ValueType;

/// User-forced bounds for a continuous category axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ForcedDomain {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

/// Category-axis domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CategoryDomain {
    /// Every point's category index in encounter order, duplicates kept.
    Ordinal(Vec<usize>),
    Scalar { min: f64, max: f64 },
}

impl CategoryDomain {
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar { .. })
    }
}

/// Value-axis domain, balanced around zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDomains {
    pub x: CategoryDomain,
    pub y: Option<ValueDomain>,
}

#[must_use]
pub fn calculate_domains(
    series: &[Series],
    category_type: ValueType,
    is_scalar: bool,
    forced: ForcedDomain,
) -> AxisDomains {
    AxisDomains {
        x: category_domain(series, category_type, is_scalar, forced),
        y: value_domain(series),
    }
}

/// Flattened category indices of every point of every series.
#[must_use]
pub fn ordinal_domain(series: &[Series]) -> Vec<usize> {
    series
        .iter()
        .flat_map(|item| item.data.iter().map(|point| point.category_index))
        .collect()
}

/// Continuous domain when the axis supports it, ordinal otherwise.
#[must_use]
pub fn category_domain(
    series: &[Series],
    category_type: ValueType,
    is_scalar: bool,
    forced: ForcedDomain,
) -> CategoryDomain {
    if is_scalar && !category_type.is_ordinal() {
        if let Some((min, max)) = scalar_domain(series, forced) {
            return CategoryDomain::Scalar { min, max };
        }
        debug!("scalar category range unusable, falling back to ordinal domain");
    }
    CategoryDomain::Ordinal(ordinal_domain(series))
}

/// Min/max of point positions, overridden side by side by finite forced bounds.
///
/// Forced bounds that would invert or collapse the range are ignored. Returns
/// `None` when no point has a position or the remaining range has zero width.
#[must_use]
pub fn scalar_domain(series: &[Series], forced: ForcedDomain) -> Option<(f64, f64)> {
    let positions = || {
        series
            .iter()
            .flat_map(|item| item.data.iter().filter_map(|point| point.x))
            .map(OrderedFloat)
    };
    let data_min = positions().min()?.into_inner();
    let data_max = positions().max()?.into_inner();

    let min = forced.start.filter(|value| value.is_finite()).unwrap_or(data_min);
    let max = forced.end.filter(|value| value.is_finite()).unwrap_or(data_max);
    if min < max {
        return Some((min, max));
    }
    debug!(min, max, "scalar category domain is empty or inverted");
    (data_min < data_max).then_some((data_min, data_max))
}

/// `[min(minY, -maxY), maxY]` over every resolved value; `None` without points.
#[must_use]
pub fn value_domain(series: &[Series]) -> Option<ValueDomain> {
    let values = || {
        series
            .iter()
            .flat_map(|item| item.data.iter().map(|point| OrderedFloat(point.value)))
    };
    let min_y = values().min()?.into_inner();
    let max_y = values().max()?.into_inner();

    Some(ValueDomain {
        min: min_y.min(-max_y),
        max: max_y,
    })
}
