use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::types::{CellValue, ValueType};

/// Semantic slot a host binds a column to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataRole {
    Timestamp,
    Category,
    Value,
    EventTitle,
    EventDescription,
}

impl DataRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "Timestamp",
            Self::Category => "Category",
            Self::Value => "Value",
            Self::EventTitle => "EventTitle",
            Self::EventDescription => "EventDescription",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Timestamp,
            Self::Category,
            Self::Value,
            Self::EventTitle,
            Self::EventDescription,
        ]
        .into_iter()
        .find(|role| role.as_str() == name)
    }
}

/// Display and format descriptor attached to every column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ColumnSource {
    pub display_name: String,
    #[serde(default)]
    pub query_name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub roles: IndexSet<DataRole>,
    #[serde(default)]
    pub value_type: ValueType,
}

impl ColumnSource {
    #[must_use]
    pub fn new(display_name: impl Into<String>, value_type: ValueType) -> Self {
        let display_name = display_name.into();
        Self {
            query_name: display_name.clone(),
            display_name,
            format: None,
            roles: IndexSet::new(),
            value_type,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: DataRole) -> Self {
        self.roles.insert(role);
        self
    }

    #[must_use]
    pub fn with_query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = query_name.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn has_role(&self, role: DataRole) -> bool {
        self.roles.contains(&role)
    }
}

/// Ordered raw values plus their descriptor. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Column {
    pub source: ColumnSource,
    #[serde(default)]
    pub values: Vec<CellValue>,
}

impl Column {
    #[must_use]
    pub fn new(source: ColumnSource, values: Vec<CellValue>) -> Self {
        Self { source, values }
    }

    /// Cell at `index`, or `Null` when the column is shorter than the table.
    #[must_use]
    pub fn cell(&self, index: usize) -> &CellValue {
        static NULL_CELL: CellValue = CellValue::Null;
        self.values.get(index).unwrap_or(&NULL_CELL)
    }
}

/// One polarity group: the measure columns sharing a series identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueGroup {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl ValueGroup {
    #[must_use]
    pub fn new(identity: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: None,
            identity: identity.into(),
            columns,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Property bag of a single metadata object, e.g. `legend` or `dataPoint`.
pub type MetadataObject = IndexMap<String, serde_json::Value>;

/// Host-provided metadata objects keyed by object name.
pub type MetadataObjects = IndexMap<String, MetadataObject>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(default)]
    pub objects: Option<MetadataObjects>,
}

/// Categorical view handed over by the host on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TabularView {
    #[serde(default)]
    pub categories: Vec<Column>,
    #[serde(default)]
    pub grouped_values: Vec<ValueGroup>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl TabularView {
    #[must_use]
    pub fn new(categories: Vec<Column>, grouped_values: Vec<ValueGroup>) -> Self {
        Self {
            categories,
            grouped_values,
            metadata: Metadata::default(),
        }
    }

    #[must_use]
    pub fn with_objects(mut self, objects: MetadataObjects) -> Self {
        self.metadata.objects = Some(objects);
        self
    }

    #[must_use]
    pub fn objects(&self) -> Option<&MetadataObjects> {
        self.metadata.objects.as_ref()
    }
}
