//! Tab group contiguity check
//!
//! Run when a tab field's priority is saved. The field is virtually inserted
//! at the requested priority; if that lands strictly inside another group's
//! priority range the two groups would interleave and the save is rejected.

use serde::Serialize;

use formtab_tabs::{FieldId, TAB_TYPE};

use crate::catalog::{Catalog, CatalogRow};
use crate::messages::ConflictMessages;

/// The save being checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCheck {
    /// Catalog table the field belongs to
    pub table_name: String,
    /// Field type to compare against
    pub type_name: String,
    /// Id of the field being saved; `None` for a new field
    pub field_id: Option<FieldId>,
    /// Label of the field being saved
    pub field_label: String,
    /// Group key of the field being saved
    pub group_key: String,
    /// Requested priority
    pub priority: i64,
}

impl OrderCheck {
    pub fn new(table_name: impl Into<String>, group_key: impl Into<String>, priority: i64) -> Self {
        Self {
            table_name: table_name.into(),
            type_name: TAB_TYPE.to_string(),
            field_id: None,
            field_label: String::new(),
            group_key: group_key.into(),
            priority,
        }
    }

    pub fn with_field(mut self, field_id: FieldId, label: impl Into<String>) -> Self {
        self.field_id = Some(field_id);
        self.field_label = label.into();
        self
    }
}

/// A group the requested priority would split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConflict {
    pub field_label: String,
    pub group_key: String,
    /// Label of the group's first tab
    pub first_label: String,
    /// Name of the group's first tab
    pub first_name: String,
    /// Shifted priority range of the group
    pub start: i64,
    pub end: i64,
}

impl OrderConflict {
    pub fn message(&self, messages: &dyn ConflictMessages) -> String {
        messages.priority_conflict(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderOutcome {
    Accepted,
    Conflict(OrderConflict),
}

impl OrderOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderOutcome::Accepted)
    }
}

#[derive(Debug)]
struct GroupSpan<'a> {
    key: &'a str,
    first: &'a CatalogRow,
    start: i64,
    end: i64,
}

pub struct OrderValidator<C> {
    catalog: C,
}

impl<C: Catalog> OrderValidator<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Check whether `check.priority` keeps every other group contiguous.
    ///
    /// Catalog failures accept the save: without overlap data there is
    /// nothing to reject.
    pub fn validate(&self, check: &OrderCheck) -> OrderOutcome {
        match self.catalog.has_group_attribute() {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(table = %check.table_name, "No group attribute in catalog, skipping order check");
                return OrderOutcome::Accepted;
            }
            Err(e) => {
                tracing::warn!(table = %check.table_name, "Failed to inspect field catalog: {}", e);
                return OrderOutcome::Accepted;
            }
        }

        let rows = match self.catalog.tab_rows(
            &check.table_name,
            &check.type_name,
            check.field_id.unwrap_or(-1),
            &check.group_key,
        ) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(table = %check.table_name, "Failed to load tab fields: {}", e);
                return OrderOutcome::Accepted;
            }
        };

        let spans = group_spans(&rows, check);
        let priority = check.priority;

        match spans
            .iter()
            .find(|span| span.start < priority && priority < span.end)
        {
            Some(span) => {
                tracing::debug!(
                    table = %check.table_name,
                    priority,
                    group = %span.key,
                    start = span.start,
                    end = span.end,
                    "Priority splits tab group"
                );
                OrderOutcome::Conflict(OrderConflict {
                    field_label: check.field_label.clone(),
                    group_key: span.key.to_string(),
                    first_label: span.first.label.clone(),
                    first_name: span.first.name.clone(),
                    start: span.start,
                    end: span.end,
                })
            }
            None => OrderOutcome::Accepted,
        }
    }
}

/// Priority range of each foreign group after shifting everything at or
/// behind the requested priority by one
fn group_spans<'a>(rows: &'a [CatalogRow], check: &OrderCheck) -> Vec<GroupSpan<'a>> {
    let mut spans: Vec<GroupSpan<'a>> = Vec::new();

    let foreign = rows
        .iter()
        .filter(|row| row.group_key != check.group_key && Some(row.id) != check.field_id);

    for row in foreign {
        let priority = if row.priority >= check.priority {
            row.priority.saturating_add(1)
        } else {
            row.priority
        };

        match spans.iter_mut().find(|s| s.key == row.group_key) {
            Some(span) => {
                if priority < span.start {
                    span.start = priority;
                    span.first = row;
                }
                span.end = span.end.max(priority);
            }
            None => spans.push(GroupSpan {
                key: &row.group_key,
                first: row,
                start: priority,
                end: priority,
            }),
        }
    }

    spans
}
