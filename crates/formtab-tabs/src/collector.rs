//! Tab group assembly
//!
//! Partitions the tab fields of a form by group key, assigns positions and
//! resolves which tab starts out active.

use std::collections::HashSet;

use crate::field::{DefaultMarker, Field, FieldList};
use crate::prior::{selection_key, PriorSelection};
use crate::state::TabPosition;
use crate::tab::{Tab, TabGroup, MIN_GROUP_SIZE};

/// Collects tab groups for one render pass
#[derive(Debug, Default)]
pub struct GroupCollector {
    groups: Vec<TabGroup>,
    visited: HashSet<String>,
}

impl GroupCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the group `group_key`.
    ///
    /// Only the first call per key does any work. Returns `None` when the
    /// group has fewer than [`MIN_GROUP_SIZE`] members.
    pub fn collect(
        &mut self,
        fields: &FieldList,
        group_key: &str,
        prior: &dyn PriorSelection,
    ) -> Option<&TabGroup> {
        if self.visited.insert(group_key.to_string()) {
            if let Some(group) = assemble(fields, group_key, prior) {
                self.groups.push(group);
            }
        }
        self.group(group_key)
    }

    /// Collect every group found in `fields`, in order of first appearance
    pub fn collect_all(&mut self, fields: &FieldList, prior: &dyn PriorSelection) {
        for field in fields.iter().filter(|f| f.is_tab()) {
            self.collect(fields, &field.group_key, prior);
        }
    }

    pub fn group(&self, group_key: &str) -> Option<&TabGroup> {
        self.groups.iter().find(|g| g.key == group_key)
    }

    pub fn group_mut(&mut self, group_key: &str) -> Option<&mut TabGroup> {
        self.groups.iter_mut().find(|g| g.key == group_key)
    }

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<TabGroup> {
        self.groups
    }
}

fn assemble(fields: &FieldList, group_key: &str, prior: &dyn PriorSelection) -> Option<TabGroup> {
    let members: Vec<&Field> = fields
        .iter()
        .filter(|f| f.is_tab() && f.group_key == group_key)
        .collect();

    if members.len() < MIN_GROUP_SIZE {
        tracing::debug!(
            group = %group_key,
            members = members.len(),
            "Tab group too small, leaving fields untabbed"
        );
        return None;
    }

    let len = members.len();
    let mut tabs: Vec<Tab> = members
        .iter()
        .enumerate()
        .map(|(index, field)| Tab::new(field, TabPosition::for_index(index, len)))
        .collect();

    // The sentinel never wins auto-selection
    tabs[len - 1].default = DefaultMarker::FirstOnSave;

    let key = selection_key(&members[0].name);
    let mut group = TabGroup::new(group_key.to_string(), key, tabs);

    let remembered = prior
        .previous_active(&group.selection_key)
        .filter(|id| group.is_selectable(*id));
    let explicit = group
        .tabs()
        .iter()
        .find(|t| t.default == DefaultMarker::ExplicitlySelected)
        .map(|t| t.field_id);
    let active = remembered
        .or(explicit)
        .unwrap_or_else(|| group.tabs()[0].field_id);

    group.select(active);

    tracing::debug!(
        group = %group_key,
        tabs = len,
        active,
        remembered = remembered.is_some(),
        "Collected tab group"
    );

    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldId;
    use crate::prior::NoPriorSelection;
    use crate::state::SENTINEL_SEQUENCE;
    use std::collections::HashMap;

    fn tab(id: FieldId, group: &str, default: DefaultMarker) -> Field {
        Field::tab(id, format!("tab{}", id), format!("Tab {}", id), group, default)
    }

    fn form(defaults: [DefaultMarker; 3]) -> FieldList {
        FieldList::new(vec![
            tab(10, "g", defaults[0]),
            Field::plain(11, "text", "a"),
            tab(20, "g", defaults[1]),
            Field::plain(25, "text", "b"),
            tab(30, "g", defaults[2]),
        ])
        .unwrap()
    }

    fn selected_id(group: &TabGroup) -> Option<FieldId> {
        group.selected().map(|t| t.field_id)
    }

    #[test]
    fn test_small_group_is_inert() {
        let fields = FieldList::new(vec![
            tab(1, "g", DefaultMarker::FirstOnSave),
            Field::plain(2, "text", "a"),
            tab(3, "g", DefaultMarker::FirstOnSave),
        ])
        .unwrap();

        let mut collector = GroupCollector::new();
        assert!(collector.collect(&fields, "g", &NoPriorSelection).is_none());
        assert!(collector.groups().is_empty());
    }

    #[test]
    fn test_sequences_and_default_selection() {
        let fields = form([DefaultMarker::FirstOnSave; 3]);
        let mut collector = GroupCollector::new();
        let group = collector.collect(&fields, "g", &NoPriorSelection).unwrap();

        let sequences: Vec<usize> = group.tabs().iter().map(|t| t.sequence()).collect();
        assert_eq!(sequences, vec![0, 1, SENTINEL_SEQUENCE]);
        assert_eq!(selected_id(group), Some(10));
        assert_eq!(group.selection_key, selection_key("tab10"));
    }

    #[test]
    fn test_explicit_default_wins_over_first() {
        let fields = form([
            DefaultMarker::FirstOnSave,
            DefaultMarker::ExplicitlySelected,
            DefaultMarker::FirstOnSave,
        ]);
        let mut collector = GroupCollector::new();
        let group = collector.collect(&fields, "g", &NoPriorSelection).unwrap();
        assert_eq!(selected_id(group), Some(20));
    }

    #[test]
    fn test_explicit_default_on_sentinel_is_ignored() {
        let fields = form([
            DefaultMarker::FirstOnSave,
            DefaultMarker::FirstOnSave,
            DefaultMarker::ExplicitlySelected,
        ]);
        let mut collector = GroupCollector::new();
        let group = collector.collect(&fields, "g", &NoPriorSelection).unwrap();
        assert_eq!(group.sentinel().default, DefaultMarker::FirstOnSave);
        assert_eq!(selected_id(group), Some(10));
    }

    #[test]
    fn test_prior_selection_wins() {
        let fields = form([
            DefaultMarker::ExplicitlySelected,
            DefaultMarker::FirstOnSave,
            DefaultMarker::FirstOnSave,
        ]);
        let mut prior = HashMap::new();
        prior.insert(selection_key("tab10"), 20);

        let mut collector = GroupCollector::new();
        let group = collector.collect(&fields, "g", &prior).unwrap();
        assert_eq!(selected_id(group), Some(20));
    }

    #[test]
    fn test_invalid_prior_selection_falls_through() {
        let fields = form([
            DefaultMarker::FirstOnSave,
            DefaultMarker::ExplicitlySelected,
            DefaultMarker::FirstOnSave,
        ]);

        for stale in [25, 30, 999] {
            let mut prior = HashMap::new();
            prior.insert(selection_key("tab10"), stale);

            let mut collector = GroupCollector::new();
            let group = collector.collect(&fields, "g", &prior).unwrap();
            assert_eq!(selected_id(group), Some(20), "stale id {}", stale);
        }
    }

    #[test]
    fn test_collect_is_idempotent() {
        let fields = form([DefaultMarker::FirstOnSave; 3]);
        let mut collector = GroupCollector::new();
        collector.collect(&fields, "g", &NoPriorSelection);

        collector.group_mut("g").unwrap().select(20);
        let mut prior = HashMap::new();
        prior.insert(selection_key("tab10"), 10);
        let group = collector.collect(&fields, "g", &prior).unwrap();

        assert_eq!(selected_id(group), Some(20));
        assert_eq!(collector.groups().len(), 1);
    }

    #[test]
    fn test_collect_all_separates_groups() {
        let fields = FieldList::new(vec![
            tab(1, "a", DefaultMarker::FirstOnSave),
            tab(2, "a", DefaultMarker::FirstOnSave),
            tab(3, "a", DefaultMarker::FirstOnSave),
            tab(4, "b", DefaultMarker::FirstOnSave),
            tab(5, "b", DefaultMarker::ExplicitlySelected),
            tab(6, "b", DefaultMarker::FirstOnSave),
            tab(7, "c", DefaultMarker::FirstOnSave),
            Field::plain(8, "text", "x"),
        ])
        .unwrap();

        let mut collector = GroupCollector::new();
        collector.collect_all(&fields, &NoPriorSelection);

        let keys: Vec<&str> = collector.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(selected_id(collector.group("b").unwrap()), Some(5));
        assert!(collector.group("c").is_none());
    }
}
