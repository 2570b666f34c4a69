use serde::{Deserialize, Serialize};

use crate::core::table::{Column, DataRole, ValueGroup};
use crate::error::{PulseError, PulseResult};

/// What to do when a primary value is missing and no secondary group exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissingSecondaryPolicy {
    /// Resolve the sample to the zero baseline.
    #[default]
    Baseline,
    /// Fail the whole conversion.
    Abort,
}

/// The two value groups whose combination yields one signed series.
///
/// The primary group carries magnitudes above the baseline; the secondary
/// group, when bound, carries magnitudes below it.
#[derive(Debug, Clone, Copy)]
pub struct PolarityPair<'a> {
    pub primary: &'a ValueGroup,
    pub secondary: Option<&'a ValueGroup>,
}

impl<'a> PolarityPair<'a> {
    pub fn from_groups(groups: &'a [ValueGroup]) -> PulseResult<Self> {
        match groups {
            [] => Err(PulseError::EmptyInput("no value groups".to_owned())),
            [primary] => Ok(Self {
                primary,
                secondary: None,
            }),
            [primary, secondary] => Ok(Self {
                primary,
                secondary: Some(secondary),
            }),
            _ => Err(PulseError::UnsupportedPolarityGroups {
                count: groups.len(),
            }),
        }
    }

    /// Measure column of the primary group.
    pub fn primary_measure(&self) -> PulseResult<&'a Column> {
        measure_column(self.primary).ok_or_else(|| {
            PulseError::EmptyInput("primary value group has no measure column".to_owned())
        })
    }

    #[must_use]
    pub fn secondary_measure(&self) -> Option<&'a Column> {
        self.secondary.and_then(measure_column)
    }

    /// Resolves the signed value at `category_index`.
    pub fn resolve(
        &self,
        category_index: usize,
        policy: MissingSecondaryPolicy,
    ) -> PulseResult<ResolvedValue> {
        let primary = self.primary_measure()?.cell(category_index).as_number();
        let secondary = self
            .secondary_measure()
            .map(|column| column.cell(category_index).as_number());
        resolve_signed_value(primary, secondary, category_index, policy)
    }
}

/// Which group a resolved value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Primary,
    Secondary,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub value: f64,
    pub polarity: Polarity,
}

/// Signed value for one sample.
///
/// `secondary` is `None` when no secondary group is bound, and `Some(None)`
/// when the group exists but has no value at this index. A bound but empty
/// secondary cell resolves to the baseline.
pub fn resolve_signed_value(
    primary: Option<f64>,
    secondary: Option<Option<f64>>,
    category_index: usize,
    policy: MissingSecondaryPolicy,
) -> PulseResult<ResolvedValue> {
    if let Some(value) = primary {
        return Ok(ResolvedValue {
            value,
            polarity: Polarity::Primary,
        });
    }

    match (secondary, policy) {
        (Some(Some(value)), _) => Ok(ResolvedValue {
            value: -value,
            polarity: Polarity::Secondary,
        }),
        (Some(None), _) | (None, MissingSecondaryPolicy::Baseline) => Ok(ResolvedValue {
            value: 0.0,
            polarity: Polarity::Baseline,
        }),
        (None, MissingSecondaryPolicy::Abort) => {
            Err(PulseError::MissingSecondaryGroup { category_index })
        }
    }
}

fn measure_column(group: &ValueGroup) -> Option<&Column> {
    group
        .columns
        .iter()
        .find(|column| column.source.has_role(DataRole::Value))
        .or_else(|| group.columns.first())
}
