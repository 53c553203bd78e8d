//! soma-content - Leveled medical education content library
//!
//! An in-memory, read-only catalog of hand-authored clinical and
//! educational entries, with lookup, category browsing and free-text
//! search.
//!
//! # Content model
//!
//! Every entry shares one schema:
//! - Identity and display names (with an optional Spanish name)
//! - Up to five complexity levels, from lay audience (1) to expert (5)
//! - An optional clinical profile for acute-care topics
//! - Citations, media, tags and cross references to other entries
//!
//! # Modules
//!
//! - `domain`: Data structures (Entry, Category, LevelContent)
//! - `content`: Built-in entries
//! - `library`: Catalog, queries and content audit
//! - `config`: CLI configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Find everything mentioning a drug
//! soma search epinephrine
//!
//! # Read one level of an entry
//! soma show celiac-disease --level 3
//!
//! # Check authoring quality
//! soma audit
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{Category, ComplexityLevel, ContentKind, CriticalCareCategory, Entry, EntryId};
pub use library::{builtin, Catalog, CatalogError, FilterOptions, MatchMode};
