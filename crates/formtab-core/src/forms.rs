//! Form host entry points
//!
//! One render pass per form display, one order check per field save. Field
//! definitions, warnings and request parameters come from the host; this
//! layer only wires them to the tab and order crates.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use formtab_order::{
    ConflictMessages, DefaultMessages, OrderCheck, OrderConflict, OrderOutcome, OrderValidator,
    SqliteCatalog,
};
use formtab_storage::Database;
use formtab_tabs::{
    render_pass, Fallback, FieldId, FieldList, NoPriorSelection, PriorSelection, RenderOutput,
    StoredSelections, TAB_TYPE,
};

use crate::config::Config;
use crate::Result;

/// Result of checking a field save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveCheck {
    Accepted,
    Rejected {
        message: String,
        conflict: OrderConflict,
    },
}

impl SaveCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SaveCheck::Accepted)
    }
}

pub struct FormTabs {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Remembered active tabs
    selections: StoredSelections,
    /// Priority overlap check
    validator: OrderValidator<SqliteCatalog>,
    /// Text for rejected saves
    messages: Arc<dyn ConflictMessages + Send + Sync>,
}

impl FormTabs {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        Self {
            selections: StoredSelections::new(db.clone()),
            validator: OrderValidator::new(SqliteCatalog::new(db.clone())),
            messages: Arc::new(DefaultMessages),
            config,
            db,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Replace the conflict message texts
    pub fn set_messages<M>(&mut self, messages: M)
    where
        M: ConflictMessages + Send + Sync + 'static,
    {
        self.messages = Arc::new(messages);
    }

    /// Run a render pass.
    ///
    /// `request` holds active tab ids echoed back by the browser, keyed by
    /// selection key; stored selections are consulted after it.
    pub fn render(
        &self,
        fields: &FieldList,
        warnings: &HashSet<FieldId>,
        request: &HashMap<String, FieldId>,
    ) -> RenderOutput {
        let stored: &dyn PriorSelection = if self.config.remember_active_tab {
            &self.selections
        } else {
            &NoPriorSelection
        };

        let output = render_pass(fields, warnings, &Fallback(request, stored));

        tracing::debug!(
            fields = fields.len(),
            groups = output.groups.len(),
            warnings = warnings.len(),
            "Rendered tab groups"
        );

        output
    }

    /// Remember `field_id` as the active tab of the group behind `selection_key`
    pub fn remember_active(&self, selection_key: &str, field_id: FieldId) -> Result<()> {
        Ok(self.selections.remember(selection_key, field_id)?)
    }

    /// Check a field save before the host persists it.
    ///
    /// Only tab fields are order-checked.
    pub fn check_field_save(&self, check: &OrderCheck) -> SaveCheck {
        if check.type_name != TAB_TYPE {
            return SaveCheck::Accepted;
        }

        match self.validator.validate(check) {
            OrderOutcome::Accepted => SaveCheck::Accepted,
            OrderOutcome::Conflict(conflict) => {
                let message = conflict.message(self.messages.as_ref());
                tracing::info!(
                    table = %check.table_name,
                    priority = check.priority,
                    group = %conflict.group_key,
                    "Rejected tab position"
                );
                SaveCheck::Rejected { message, conflict }
            }
        }
    }
}
