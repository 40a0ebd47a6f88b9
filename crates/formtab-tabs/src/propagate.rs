//! Validation error propagation
//!
//! A tab whose span contains a field with a validation warning is flagged,
//! and the flagged tab with the smallest id is forced active.

use std::collections::HashSet;

use crate::field::{FieldId, FieldList};
use crate::tab::TabGroup;

/// Flag tabs containing warned fields and move the selection to the first of
/// them. Returns the id of the tab forced active, if any.
pub fn propagate_errors(
    group: &mut TabGroup,
    fields: &FieldList,
    warnings: &HashSet<FieldId>,
) -> Option<FieldId> {
    let flags: Vec<bool> = (0..group.len())
        .map(|index| match group.span(index) {
            Some(span) => fields
                .in_span(span)
                .iter()
                .any(|f| warnings.contains(&f.id)),
            None => false,
        })
        .collect();

    for (tab, has_error) in group.tabs_mut().iter_mut().zip(flags) {
        tab.has_error = has_error;
    }

    let error_tab = group
        .tabs()
        .iter()
        .filter(|t| t.has_error)
        .map(|t| t.field_id)
        .min()?;

    let previous = group.selected().map(|t| t.field_id);
    group.select(error_tab);

    tracing::debug!(
        group = %group.key,
        error_tab,
        previous = ?previous,
        "Activated tab containing validation errors"
    );

    Some(error_tab)
}
