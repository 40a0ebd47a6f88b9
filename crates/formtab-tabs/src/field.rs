//! Form field descriptors
//!
//! Fields arrive from the host in display order. Only fields of type
//! [`TAB_TYPE`] take part in tab grouping; everything else is content that
//! lives between two tabs.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::TabError;
use crate::Result;

pub type FieldId = i64;

/// Type name of the tab marker field
pub const TAB_TYPE: &str = "tabs";

/// Which tab a group shows when nothing else decides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultMarker {
    /// Not a tab field
    #[default]
    None,
    /// Show the first tab, or the one active when the form was last saved
    FirstOnSave,
    /// Show this tab
    ExplicitlySelected,
}

impl std::str::FromStr for DefaultMarker {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "" | "1" => Ok(DefaultMarker::FirstOnSave),
            "2" => Ok(DefaultMarker::ExplicitlySelected),
            other => Err(format!("Unknown default marker: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier, increasing in display order
    pub id: FieldId,
    /// Field type name as registered with the host
    pub type_name: String,
    /// Form name of the field
    pub name: String,
    /// Display label
    pub label: String,
    /// Tab group key, empty when the field is not grouped
    pub group_key: String,
    pub default: DefaultMarker,
}

impl Field {
    /// Build a tab marker field
    pub fn tab(
        id: FieldId,
        name: impl Into<String>,
        label: impl Into<String>,
        group_key: impl Into<String>,
        default: DefaultMarker,
    ) -> Self {
        Self {
            id,
            type_name: TAB_TYPE.to_string(),
            name: name.into(),
            label: label.into(),
            group_key: group_key.into(),
            default,
        }
    }

    /// Build a content field of any other type
    pub fn plain(id: FieldId, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            type_name: type_name.into(),
            label: name.clone(),
            name,
            group_key: String::new(),
            default: DefaultMarker::None,
        }
    }

    /// Parse a compact tab definition: `tabs|name|label|default|group`.
    ///
    /// `default` and `group` may be omitted.
    pub fn from_definition(id: FieldId, definition: &str) -> Result<Self> {
        let parts: Vec<&str> = definition.split('|').map(str::trim).collect();

        if parts.first().copied() != Some(TAB_TYPE) {
            return Err(TabError::InvalidDefinition(format!(
                "expected `{}` type in `{}`",
                TAB_TYPE, definition
            )));
        }
        if parts.len() > 5 {
            return Err(TabError::InvalidDefinition(format!(
                "too many segments in `{}`",
                definition
            )));
        }

        let name = parts.get(1).copied().unwrap_or_default();
        if name.is_empty() {
            return Err(TabError::InvalidDefinition(format!(
                "missing name in `{}`",
                definition
            )));
        }

        let label = parts.get(2).copied().unwrap_or(name);
        let default = parts
            .get(3)
            .copied()
            .unwrap_or_default()
            .parse::<DefaultMarker>()
            .map_err(TabError::InvalidDefinition)?;
        let group_key = parts.get(4).copied().unwrap_or_default();

        Ok(Self::tab(id, name, label, group_key, default))
    }

    pub fn is_tab(&self) -> bool {
        self.type_name == TAB_TYPE
    }
}

/// Fields of one form in display order
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Ids must be strictly increasing; display order and id order coincide.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        for pair in fields.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(TabError::NonIncreasingId {
                    previous: pair[0].id,
                    id: pair[1].id,
                });
            }
        }

        Ok(Self { fields })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields
            .binary_search_by_key(&id, |f| f.id)
            .ok()
            .map(|index| &self.fields[index])
    }

    /// Fields whose id falls inside `span`
    pub fn in_span(&self, span: RangeInclusive<FieldId>) -> &[Field] {
        let start = self.fields.partition_point(|f| f.id < *span.start());
        let end = self.fields.partition_point(|f| f.id <= *span.end());
        if start >= end {
            return &[];
        }
        &self.fields[start..end]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
