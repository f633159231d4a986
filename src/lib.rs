//! Bidirectional transformation between flat, parent-referencing record
//! collections and nested hierarchical trees, plus an ancestor-chain
//! resolver.
//!
//! Records are plain JSON objects; the field names carrying the id, the
//! parent id and the child sequence are configured via [`TreeConfig`].
//! All operations are pure: caller input is never modified, output records
//! are fresh clones, and no state survives a call.
//!
//! ```
//! use rectree::{build_tree, flatten_tree, TreeConfig};
//! use serde_json::json;
//!
//! let config = TreeConfig::default();
//! let flat = vec![
//!     json!({"id": 1, "pid": 0, "name": "root"}),
//!     json!({"id": 2, "pid": 1, "name": "leaf"}),
//! ];
//!
//! let forest = build_tree(&flat, &config)?;
//! assert_eq!(forest[0]["children"][0]["name"], "leaf");
//!
//! let round = flatten_tree(&forest, &config)?;
//! assert_eq!(round[1]["pid"], json!(1));
//! # Ok::<(), rectree::TreeError>(())
//! ```

pub mod ancestors;
pub mod builder;
pub mod config;
pub mod errors;
pub mod flatten;
mod record;

pub use ancestors::{find_ancestors, find_ancestors_in_tree};
pub use builder::build_tree;
pub use config::TreeConfig;
pub use errors::{TreeError, TreeResult};
pub use flatten::flatten_tree;
pub use record::Record;
