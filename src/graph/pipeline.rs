//! One-call entry point: records in, elements and diagnostics out.

use log::info;
use serde::Serialize;

use super::diagnostics::Diagnostics;
use super::elements::{GraphElement, generate_with};
use super::index::NodeIndex;
use super::options::GraphOptions;
use super::types::ModuleRecord;
use crate::error::Result;

/// Result of a graph build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphBuild {
	/// Renderer elements in emission order.
	pub elements: Vec<GraphElement>,
	/// Findings the build degraded around.
	pub diagnostics: Diagnostics,
}

impl GraphBuild {
	/// Number of node elements.
	pub fn node_count(&self) -> usize {
		self.elements.iter().filter(|e| e.as_node().is_some()).count()
	}

	/// Number of edge elements.
	pub fn edge_count(&self) -> usize {
		self.elements.len() - self.node_count()
	}
}

/// Index the records, generate elements, and collect diagnostics.
///
/// Fails only when the duplicate policy is [`Reject`] and a code repeats.
///
/// [`Reject`]: super::index::DuplicatePolicy::Reject
pub fn build(records: &[ModuleRecord], options: &GraphOptions) -> Result<GraphBuild> {
	let index = NodeIndex::build(records, options.duplicates)?;
	let elements = generate_with(&index, options);
	let diagnostics = Diagnostics::collect(&index);

	let graph = GraphBuild {
		elements,
		diagnostics,
	};
	info!(
		"module-graph: built {} nodes, {} edges (simplify: {})",
		graph.node_count(),
		graph.edge_count(),
		options.simplify
	);
	Ok(graph)
}
