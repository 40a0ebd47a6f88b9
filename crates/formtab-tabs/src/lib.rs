//! FormTab Tab Groups
//!
//! Turns an ordered list of form fields into tabbed sections.
//! Tab fields sharing a group key form a group of at least three members; the
//! last member only closes the group. A tab containing a field that failed
//! validation is flagged and forced active.

mod collector;
mod error;
mod field;
mod pass;
mod prior;
mod propagate;
mod render;
mod state;
mod tab;

pub use collector::GroupCollector;
pub use error::TabError;
pub use field::{DefaultMarker, Field, FieldId, FieldList, TAB_TYPE};
pub use pass::{render_pass, RenderContext, RenderOutput};
pub use prior::{selection_key, Fallback, NoPriorSelection, PriorSelection, StoredSelections};
pub use propagate::propagate_errors;
pub use render::{render_group, render_tab, MenuEntry, OutputMap, RenderInstruction, RenderSink};
pub use state::{TabPosition, SENTINEL_SEQUENCE};
pub use tab::{Tab, TabGroup, MIN_GROUP_SIZE};

pub type Result<T> = std::result::Result<T, TabError>;
