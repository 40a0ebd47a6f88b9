//! Tab annotations and tab groups
//!
//! A tab group holds at least [`MIN_GROUP_SIZE`] tabs sharing one group key.
//! Annotations live for a single render pass and are never persisted.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::field::{DefaultMarker, Field, FieldId};
use crate::state::TabPosition;

/// Fewer members than this leave a group inert
pub const MIN_GROUP_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Id of the tab marker field
    pub field_id: FieldId,
    /// Form name of the tab marker field
    pub name: String,
    /// Label shown in the tab menu
    pub label: String,
    /// Default marker after group assembly
    pub default: DefaultMarker,
    /// Position within the group
    pub position: TabPosition,
    /// Shown expanded on render
    pub selected: bool,
    /// A field inside this tab failed validation
    pub has_error: bool,
}

impl Tab {
    pub(crate) fn new(field: &Field, position: TabPosition) -> Self {
        Self {
            field_id: field.id,
            name: field.name.clone(),
            label: field.label.clone(),
            default: field.default,
            position,
            selected: false,
            has_error: false,
        }
    }

    pub fn sequence(&self) -> usize {
        self.position.sequence()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabGroup {
    /// Shared group key
    pub key: String,
    /// Key under which the active tab is remembered between passes
    pub selection_key: String,
    tabs: Vec<Tab>,
}

impl TabGroup {
    pub(crate) fn new(key: String, selection_key: String, tabs: Vec<Tab>) -> Self {
        debug_assert!(tabs.len() >= MIN_GROUP_SIZE);
        Self {
            key,
            selection_key,
            tabs,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub(crate) fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn sentinel(&self) -> &Tab {
        &self.tabs[self.tabs.len() - 1]
    }

    /// Tabs that carry content, i.e. all but the sentinel
    pub fn content_tabs(&self) -> &[Tab] {
        &self.tabs[..self.tabs.len() - 1]
    }

    pub fn selected(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.selected)
    }

    /// Whether `field_id` names a tab that can be selected
    pub fn is_selectable(&self, field_id: FieldId) -> bool {
        self.content_tabs().iter().any(|t| t.field_id == field_id)
    }

    /// Field ids between tab `index` and its successor.
    ///
    /// The sentinel has no span.
    pub fn span(&self, index: usize) -> Option<RangeInclusive<FieldId>> {
        let tab = self.tabs.get(index)?;
        let next = self.tabs.get(index + 1)?;
        Some(tab.field_id + 1..=next.field_id - 1)
    }

    /// Mark exactly `field_id` as selected. Returns false and leaves the
    /// selection untouched if it is not a selectable member.
    pub fn select(&mut self, field_id: FieldId) -> bool {
        if !self.is_selectable(field_id) {
            return false;
        }
        for tab in &mut self.tabs {
            tab.selected = tab.field_id == field_id;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[FieldId]) -> TabGroup {
        let tabs = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let field = Field::tab(*id, format!("tab{}", id), "", "g", DefaultMarker::FirstOnSave);
                Tab::new(&field, TabPosition::for_index(i, ids.len()))
            })
            .collect();
        TabGroup::new("g".to_string(), "key".to_string(), tabs)
    }

    #[test]
    fn test_spans() {
        let group = group(&[10, 20, 30]);
        assert_eq!(group.span(0), Some(11..=19));
        assert_eq!(group.span(1), Some(21..=29));
        assert_eq!(group.span(2), None);
    }

    #[test]
    fn test_adjacent_tabs_have_empty_span() {
        let group = group(&[1, 2, 3]);
        assert!(group.span(0).unwrap().is_empty());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut group = group(&[10, 20, 30]);
        assert!(group.select(10));
        assert!(group.select(20));
        let selected: Vec<FieldId> = group
            .tabs()
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.field_id)
            .collect();
        assert_eq!(selected, vec![20]);
    }

    #[test]
    fn test_sentinel_not_selectable() {
        let mut group = group(&[10, 20, 30]);
        group.select(10);
        assert!(!group.select(30));
        assert!(!group.select(99));
        assert_eq!(group.selected().map(|t| t.field_id), Some(10));
        assert!(!group.sentinel().selected);
    }
}
