//! Conflict message formatting

use crate::validator::OrderConflict;

/// Turns a conflict into user-facing text. Hosts plug in their own
/// translations.
pub trait ConflictMessages {
    fn priority_conflict(&self, conflict: &OrderConflict) -> String;
}

/// English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl ConflictMessages for DefaultMessages {
    fn priority_conflict(&self, conflict: &OrderConflict) -> String {
        format!(
            "\"{}\" cannot be placed inside tab group \"{}\" (starting with \"{}\" [{}]). Move it before or after that group.",
            conflict.field_label, conflict.group_key, conflict.first_label, conflict.first_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_names_group() {
        let conflict = OrderConflict {
            field_label: "Position".to_string(),
            group_key: "G2".to_string(),
            first_label: "Address".to_string(),
            first_name: "address".to_string(),
            start: 5,
            end: 8,
        };

        let message = DefaultMessages.priority_conflict(&conflict);
        assert!(message.contains("\"G2\""));
        assert!(message.contains("\"Address\" [address]"));
        assert!(message.starts_with("\"Position\""));
    }
}
