//! Module dependency graph construction.
//!
//! Turns a module table into renderer elements and tracks click selection:
//! - Node index keyed by trimmed module code, with an explicit duplicate policy
//! - Node styling from module status, edge styling from dependency kind
//! - Optional transitive reduction hiding edges implied by other dependencies
//! - Selection propagating from a clicked node to all of its successors
//!
//! # Example
//!
//! ```
//! use module_graph::graph::{GraphOptions, ModuleRecord, SelectionState, build, select};
//!
//! let records = vec![
//!     ModuleRecord::new("A", "a", Vec::<String>::new()),
//!     ModuleRecord::new("B", "b", ["a"]),
//!     ModuleRecord::new("C", "c", ["a", "b"]),
//! ];
//! let graph = build(&records, &GraphOptions::default()).unwrap();
//! assert_eq!(graph.edge_count(), 2);
//!
//! let selection = select(&graph.elements, Some("c"), &SelectionState::empty());
//! assert_eq!(selection.highlighted.len(), 5);
//! ```

mod diagnostics;
mod elements;
mod index;
mod options;
mod pipeline;
pub mod reach;
mod sample;
mod selection;
pub mod theme;
mod types;

pub use diagnostics::{DanglingReference, Diagnostics};
pub use elements::{EdgeElement, GraphElement, NodeElement, generate, generate_with};
pub use index::{DuplicatePolicy, IndexedNode, NodeIndex};
pub use options::GraphOptions;
pub use pipeline::{GraphBuild, build};
pub use sample::sample_records;
pub use selection::{FADED_CLASS, SELECTED_CLASS, SelectionState, select, successors};
pub use theme::{Color, LineStyle, NodeStyle, Theme};
pub use types::{Dependency, DependencyKind, ModuleRecord, ModuleStatus};
