pub mod domain;
pub mod gap;
pub mod polarity;
pub mod primitives;
pub mod roles;
pub mod scale;
pub mod series;
pub mod table;
pub mod tooltip;
pub mod types;

pub use domain::{
    AxisDomains, CategoryDomain, ForcedDomain, ValueDomain, calculate_domains, category_domain,
    ordinal_domain, scalar_domain, value_domain,
};
pub use gap::{MAX_ORDINAL_STEP, MIN_INTERVAL_MS, is_gap};
pub use polarity::{
    MissingSecondaryPolicy, Polarity, PolarityPair, ResolvedValue, resolve_signed_value,
};
pub use roles::{RoleIndices, find_role_index, find_role_index_by_name};
pub use scale::ValueScale;
pub use series::{
    DataLabelSettings, DataPoint, Sample, Series, SeriesBuildOptions, SeriesTemplate,
    build_series,
};
pub use table::{
    Column, ColumnSource, DataRole, Metadata, MetadataObject, MetadataObjects, TabularView,
    ValueGroup,
};
pub use tooltip::{
    DEFAULT_LARGE_VALUE_DIGITS, TooltipInfo, TooltipInput, TooltipItem, assemble_tooltip,
    format_tooltip_value,
};
pub use types::{CellValue, ValueType, Viewport};
