//! Field catalog queries

use serde::{Deserialize, Serialize};

use formtab_storage::Database;
use formtab_tabs::FieldId;

use crate::Result;

/// Catalog table holding the configured fields
pub const FIELD_TABLE: &str = "form_fields";

/// Catalog column holding the tab group key
pub const GROUP_COLUMN: &str = "group_by";

/// A configured tab field as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub id: FieldId,
    pub priority: i64,
    pub label: String,
    pub name: String,
    pub group_key: String,
}

pub trait Catalog {
    /// Whether the catalog knows about group keys at all
    fn has_group_attribute(&self) -> Result<bool>;

    /// Fields of `type_name` in `table_name`, except `exclude_id` and members
    /// of `exclude_group`, ordered by group key then priority
    fn tab_rows(
        &self,
        table_name: &str,
        type_name: &str,
        exclude_id: FieldId,
        exclude_group: &str,
    ) -> Result<Vec<CatalogRow>>;
}

/// Catalog stored in the SQLite field table
#[derive(Clone)]
pub struct SqliteCatalog {
    db: Database,
}

impl SqliteCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Catalog for SqliteCatalog {
    fn has_group_attribute(&self) -> Result<bool> {
        Ok(self.db.has_column(FIELD_TABLE, GROUP_COLUMN)?)
    }

    fn tab_rows(
        &self,
        table_name: &str,
        type_name: &str,
        exclude_id: FieldId,
        exclude_group: &str,
    ) -> Result<Vec<CatalogRow>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, prio, label, name, group_by FROM form_fields
                 WHERE table_name = ?1 AND type_name = ?2 AND id != ?3 AND group_by != ?4
                 ORDER BY group_by, prio ASC",
            )?;

            let rows = stmt
                .query_map(
                    rusqlite::params![table_name, type_name, exclude_id, exclude_group],
                    |row| {
                        Ok(CatalogRow {
                            id: row.get(0)?,
                            priority: row.get(1)?,
                            label: row.get(2)?,
                            name: row.get(3)?,
                            group_key: row.get(4)?,
                        })
                    },
                )?
                .collect::<rusqlite::Result<Vec<CatalogRow>>>()?;

            Ok(rows)
        })?)
    }
}
