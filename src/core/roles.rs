use crate::core::table::{Column, DataRole};

/// Returns the index of the first column bound to `role`.
///
/// Absence is a normal outcome; callers decide whether the role is required.
#[must_use]
pub fn find_role_index(columns: &[Column], role: DataRole) -> Option<usize> {
    columns.iter().position(|column| column.source.has_role(role))
}

/// Name-based lookup for hosts that carry roles as strings.
#[must_use]
pub fn find_role_index_by_name(columns: &[Column], role_name: &str) -> Option<usize> {
    DataRole::from_name(role_name).and_then(|role| find_role_index(columns, role))
}

/// Resolved column positions for every role the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleIndices {
    pub timestamp: usize,
    pub event_title: Option<usize>,
    pub event_description: Option<usize>,
}

impl RoleIndices {
    /// `None` when the required timestamp role is unbound.
    #[must_use]
    pub fn resolve(columns: &[Column]) -> Option<Self> {
        Some(Self {
            timestamp: find_role_index(columns, DataRole::Timestamp)?,
            event_title: find_role_index(columns, DataRole::EventTitle),
            event_description: find_role_index(columns, DataRole::EventDescription),
        })
    }
}
