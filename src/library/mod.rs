//! Content library: the in-memory catalog and its query operations.
//!
//! # Data Flow
//!
//! ```text
//! static definitions (crate::content)
//!         │
//!         ▼
//!     Catalog::from_entries    # duplicate-id and level-key checks
//!         │
//!         ▼
//!     get_by_id / get_by_category / search / filter / categories
//!         │
//!         ▼
//!     consumer (CLI, UI)
//! ```
//!
//! Nothing writes to a catalog after construction.

pub mod audit;
pub mod catalog;
pub mod query;

pub use audit::{AuditIssue, AuditReport, CheckKind, Severity};
pub use catalog::{builtin, Catalog, CatalogError, ResolvedReference};
pub use query::{FilterOptions, MatchMode};
