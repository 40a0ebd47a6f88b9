//! FormTab Order Validation
//!
//! Tab groups must occupy contiguous priority blocks. When a tab field is
//! saved with a new priority, the validator checks that the position does not
//! fall inside another group:
//! - no group attribute in the catalog yet: nothing to check
//! - inside a foreign group's range: rejected with a descriptive message
//! - catalog unavailable: accepted, the save path must not fail on it

mod catalog;
mod error;
mod messages;
mod validator;

pub use catalog::{Catalog, CatalogRow, SqliteCatalog, FIELD_TABLE, GROUP_COLUMN};
pub use error::OrderError;
pub use messages::{ConflictMessages, DefaultMessages};
pub use validator::{OrderCheck, OrderConflict, OrderOutcome, OrderValidator};

pub type Result<T> = std::result::Result<T, OrderError>;
