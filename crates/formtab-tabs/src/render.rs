//! Render instructions
//!
//! Each tab emits a short list of instructions keyed by its own field id, so
//! the markup lands where the tab field itself would have rendered.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::field::FieldId;
use crate::state::TabPosition;
use crate::tab::TabGroup;

/// One entry of the tab menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub field_id: FieldId,
    pub label: String,
    pub selected: bool,
    pub has_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Open the tab container and print the menu
    OpenGroup {
        group_key: String,
        selection_key: String,
        menu: Vec<MenuEntry>,
    },
    /// Open the content pane of a tab
    OpenTab {
        field_id: FieldId,
        selected: bool,
        has_error: bool,
    },
    CloseTab,
    CloseGroup,
}

/// Output fragments by field id, read later by the host's templates
pub trait RenderSink {
    /// Make sure an entry exists for `field_id` without touching its content
    fn reserve(&mut self, field_id: FieldId);

    /// Replace the entry for `field_id`
    fn write(&mut self, field_id: FieldId, fragment: Vec<RenderInstruction>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputMap {
    entries: BTreeMap<FieldId, Vec<RenderInstruction>>,
}

impl OutputMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_id: FieldId) -> Option<&[RenderInstruction]> {
        self.entries.get(&field_id).map(Vec::as_slice)
    }

    pub fn contains(&self, field_id: FieldId) -> bool {
        self.entries.contains_key(&field_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RenderSink for OutputMap {
    fn reserve(&mut self, field_id: FieldId) {
        self.entries.entry(field_id).or_default();
    }

    fn write(&mut self, field_id: FieldId, fragment: Vec<RenderInstruction>) {
        self.entries.insert(field_id, fragment);
    }
}

/// Instructions for tab `index` of `group`
pub fn render_tab(group: &TabGroup, index: usize) -> Vec<RenderInstruction> {
    let Some(tab) = group.tabs().get(index) else {
        return Vec::new();
    };

    let open_tab = RenderInstruction::OpenTab {
        field_id: tab.field_id,
        selected: tab.selected,
        has_error: tab.has_error,
    };

    match tab.position {
        TabPosition::First => vec![
            RenderInstruction::OpenGroup {
                group_key: group.key.clone(),
                selection_key: group.selection_key.clone(),
                menu: menu(group),
            },
            open_tab,
        ],
        TabPosition::Middle(_) => vec![RenderInstruction::CloseTab, open_tab],
        TabPosition::Sentinel => vec![RenderInstruction::CloseTab, RenderInstruction::CloseGroup],
    }
}

/// Write the instructions of every tab in `group` into `sink`
pub fn render_group(group: &TabGroup, sink: &mut dyn RenderSink) {
    for (index, tab) in group.tabs().iter().enumerate() {
        sink.write(tab.field_id, render_tab(group, index));
    }
}

fn menu(group: &TabGroup) -> Vec<MenuEntry> {
    group
        .content_tabs()
        .iter()
        .map(|tab| MenuEntry {
            field_id: tab.field_id,
            label: tab.label.clone(),
            selected: tab.selected,
            has_error: tab.has_error,
        })
        .collect()
}
