//! Previously active tab lookup
//!
//! A group remembers its active tab under a key derived from the form name of
//! its first member. Hosts usually echo that key back as a request parameter;
//! [`StoredSelections`] keeps it in the settings table instead.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use formtab_storage::Database;

use crate::field::FieldId;
use crate::Result;

/// Key under which a group's active tab is remembered
pub fn selection_key(field_name: &str) -> String {
    format!("{:x}", Sha256::digest(field_name.as_bytes()))
}

pub trait PriorSelection {
    /// Id of the tab that was active last time, if any
    fn previous_active(&self, key: &str) -> Option<FieldId>;
}

impl<T: PriorSelection + ?Sized> PriorSelection for &T {
    fn previous_active(&self, key: &str) -> Option<FieldId> {
        (**self).previous_active(key)
    }
}

/// Nothing remembered
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPriorSelection;

impl PriorSelection for NoPriorSelection {
    fn previous_active(&self, _key: &str) -> Option<FieldId> {
        None
    }
}

/// Request parameters keyed by selection key
impl PriorSelection for HashMap<String, FieldId> {
    fn previous_active(&self, key: &str) -> Option<FieldId> {
        self.get(key).copied()
    }
}

/// Ask `primary` first, then `secondary`
#[derive(Debug, Clone, Copy)]
pub struct Fallback<A, B>(pub A, pub B);

impl<A: PriorSelection, B: PriorSelection> PriorSelection for Fallback<A, B> {
    fn previous_active(&self, key: &str) -> Option<FieldId> {
        self.0
            .previous_active(key)
            .or_else(|| self.1.previous_active(key))
    }
}

const SETTING_PREFIX: &str = "tab_selection:";

/// Selections persisted in the settings table
#[derive(Clone)]
pub struct StoredSelections {
    db: Database,
}

impl StoredSelections {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Remember `field_id` as the active tab for `key`
    pub fn remember(&self, key: &str, field_id: FieldId) -> Result<()> {
        self.db
            .set_setting(&format!("{}{}", SETTING_PREFIX, key), &field_id.to_string())?;
        tracing::debug!(selection_key = %key, field_id, "Remembered active tab");
        Ok(())
    }
}

impl PriorSelection for StoredSelections {
    fn previous_active(&self, key: &str) -> Option<FieldId> {
        match self.db.get_setting(&format!("{}{}", SETTING_PREFIX, key)) {
            Ok(Some(value)) => match value.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(selection_key = %key, value = %value, "Ignoring unparsable stored tab selection");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(selection_key = %key, "Failed to read stored tab selection: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_key_is_stable_hex() {
        let key = selection_key("FORM[contact][5]");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, selection_key("FORM[contact][5]"));
        assert_ne!(key, selection_key("FORM[contact][6]"));
    }

    #[test]
    fn test_fallback_order() {
        let mut request = HashMap::new();
        request.insert("a".to_string(), 20);
        let mut stored = HashMap::new();
        stored.insert("a".to_string(), 10);
        stored.insert("b".to_string(), 40);

        let prior = Fallback(&request, &stored);
        assert_eq!(prior.previous_active("a"), Some(20));
        assert_eq!(prior.previous_active("b"), Some(40));
        assert_eq!(prior.previous_active("c"), None);
    }

    #[test]
    fn test_stored_selections() {
        let db = Database::open_in_memory().unwrap();
        let stored = StoredSelections::new(db.clone());

        assert_eq!(stored.previous_active("k"), None);
        stored.remember("k", 20).unwrap();
        assert_eq!(stored.previous_active("k"), Some(20));

        db.set_setting("tab_selection:bad", "not-a-number").unwrap();
        assert_eq!(stored.previous_active("bad"), None);
    }
}
