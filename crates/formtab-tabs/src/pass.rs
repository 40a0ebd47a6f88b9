//! Render pass
//!
//! Walks the fields of a form in order, the way the host visits them. Tab
//! fields collect their group on first sight and reserve an output slot; the
//! sentinel of each group, visited last, flags errors and writes the markup
//! for the whole group.

use std::collections::HashSet;

use serde::Serialize;

use crate::collector::GroupCollector;
use crate::field::{Field, FieldId, FieldList};
use crate::prior::PriorSelection;
use crate::propagate::propagate_errors;
use crate::render::{render_group, OutputMap, RenderSink};
use crate::tab::TabGroup;

/// Everything one render pass reads and writes
pub struct RenderContext<'a> {
    pub fields: &'a FieldList,
    /// Ids of fields that failed validation
    pub warnings: &'a HashSet<FieldId>,
    pub output: OutputMap,
    collector: GroupCollector,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub groups: Vec<TabGroup>,
    pub output: OutputMap,
}

impl RenderOutput {
    pub fn group(&self, group_key: &str) -> Option<&TabGroup> {
        self.groups.iter().find(|g| g.key == group_key)
    }
}

impl<'a> RenderContext<'a> {
    pub fn new(fields: &'a FieldList, warnings: &'a HashSet<FieldId>) -> Self {
        Self {
            fields,
            warnings,
            output: OutputMap::new(),
            collector: GroupCollector::new(),
        }
    }

    /// Visit one field. Non-tab fields are left to the host.
    pub fn enter_field(&mut self, field: &Field, prior: &dyn PriorSelection) {
        if !field.is_tab() {
            return;
        }

        let is_sentinel = self
            .collector
            .collect(self.fields, &field.group_key, prior)
            .map(|group| group.sentinel().field_id == field.id)
            .unwrap_or(false);

        if !is_sentinel {
            self.output.reserve(field.id);
            return;
        }

        if let Some(group) = self.collector.group_mut(&field.group_key) {
            propagate_errors(group, self.fields, self.warnings);
            render_group(group, &mut self.output);
        }
    }

    pub fn run(mut self, prior: &dyn PriorSelection) -> RenderOutput {
        let fields = self.fields;
        for field in fields.iter() {
            self.enter_field(field, prior);
        }
        self.finish()
    }

    pub fn finish(self) -> RenderOutput {
        RenderOutput {
            groups: self.collector.into_groups(),
            output: self.output,
        }
    }
}

/// Run a full render pass over `fields`
pub fn render_pass(
    fields: &FieldList,
    warnings: &HashSet<FieldId>,
    prior: &dyn PriorSelection,
) -> RenderOutput {
    RenderContext::new(fields, warnings).run(prior)
}
