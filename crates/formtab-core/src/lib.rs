//! FormTab Core
//!
//! Host-facing coordination: configuration, logging, and the two entry
//! points a form host calls, one per render pass and one per field save.

mod config;
mod error;
mod forms;

pub use config::Config;
pub use error::CoreError;
pub use forms::{FormTabs, SaveCheck};

// Re-export core components
pub use formtab_order::{
    Catalog, CatalogRow, ConflictMessages, DefaultMessages, OrderCheck, OrderConflict, OrderError,
    OrderOutcome, OrderValidator, SqliteCatalog,
};
pub use formtab_storage::{Database, StorageError};
pub use formtab_tabs::{
    render_pass, selection_key, DefaultMarker, Field, FieldId, FieldList, MenuEntry, OutputMap,
    PriorSelection, RenderInstruction, RenderOutput, Tab, TabError, TabGroup, TabPosition,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter`. Calling this again is a no-op.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Initialize logging with the filter from `config`
pub fn init_logging_from(config: &Config) {
    init_logging(&config.log_filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("info");
        tracing::debug!("still alive");
    }

    #[test]
    fn test_init_logging_from_config() {
        let config = Config::from_toml("log_filter = \"formtab_tabs=debug\"").unwrap();
        init_logging_from(&config);
        tracing::info!(filter = %config.log_filter, "configured");
    }
}
