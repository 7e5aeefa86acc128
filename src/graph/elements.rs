//! Graph element generation.
//!
//! Turns a [`NodeIndex`] into the flat node/edge list the renderer consumes.
//! Output order is the index's insertion order, each node followed by its
//! edges in dependency-set order, so identical input never reshuffles layout.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::index::NodeIndex;
use super::options::GraphOptions;
use super::reach::{is_implied, path_exists};
use super::theme::{Color, LineStyle};
use super::types::Dependency;

/// A module vertex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeElement {
	/// Module code, trimmed.
	pub id: String,
	/// Display label, legacy marker included.
	pub name: String,
	/// Free text carried through from the record.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub description: String,
	/// Fill color.
	pub color: Color,
	/// Solid for active modules, dashed for legacy ones.
	pub border_style: LineStyle,
	/// Border color.
	pub border_color: Color,
}

/// A "depends on" arc from `source` to `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeElement {
	/// `"<source>-<target>"`.
	pub id: String,
	/// Module that depends on `target`.
	pub source: String,
	/// Dependency code, soft marker stripped. May name no node.
	pub target: String,
	/// Dashed for soft dependencies.
	pub style: LineStyle,
}

impl EdgeElement {
	/// Stable id for an edge.
	pub fn edge_id(source: &str, target: &str) -> String {
		format!("{source}-{target}")
	}
}

/// One renderer element, serialized as `{ "group": ..., "data": {...} }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", content = "data")]
pub enum GraphElement {
	/// A module.
	#[serde(rename = "nodes")]
	Node(NodeElement),
	/// A dependency.
	#[serde(rename = "edges")]
	Edge(EdgeElement),
}

impl GraphElement {
	/// Node or edge id.
	pub fn id(&self) -> &str {
		match self {
			Self::Node(node) => &node.id,
			Self::Edge(edge) => &edge.id,
		}
	}

	/// The node, if this is one.
	pub fn as_node(&self) -> Option<&NodeElement> {
		match self {
			Self::Node(node) => Some(node),
			Self::Edge(_) => None,
		}
	}

	/// The edge, if this is one.
	pub fn as_edge(&self) -> Option<&EdgeElement> {
		match self {
			Self::Edge(edge) => Some(edge),
			Self::Node(_) => None,
		}
	}
}

/// Generate elements with the default theme.
pub fn generate(index: &NodeIndex, simplify: bool) -> Vec<GraphElement> {
	generate_with(index, &GraphOptions::simplified(simplify))
}

/// Generate elements with explicit options.
pub fn generate_with(index: &NodeIndex, options: &GraphOptions) -> Vec<GraphElement> {
	let mut elements = Vec::with_capacity(index.len() * 2);
	let mut edges = plan_edges(index, options.simplify).into_iter().peekable();

	for (code, node) in index.iter() {
		let style = options.theme.node_style(node.status);
		elements.push(GraphElement::Node(NodeElement {
			id: code.to_string(),
			name: node.name.clone(),
			description: node.description.clone(),
			color: style.color,
			border_style: style.border_style,
			border_color: style.border_color,
		}));

		while let Some(edge) = edges.next_if(|edge| edge.source == code) {
			if edge.hidden {
				debug!("module-graph: {} -> {} is implied, hiding edge", code, edge.dep.raw);
				continue;
			}
			elements.push(GraphElement::Edge(EdgeElement {
				id: EdgeElement::edge_id(code, edge.dep.target),
				source: code.to_string(),
				target: edge.dep.target.to_string(),
				style: edge.dep.kind.into(),
			}));
		}
	}

	elements
}

/// A dependency edge before simplify mode has settled on it.
struct PlannedEdge<'a> {
	source: &'a str,
	dep: Dependency<'a>,
	hidden: bool,
}

/// Every edge in emission order, marked hidden where simplify mode drops it.
fn plan_edges(index: &NodeIndex, simplify: bool) -> Vec<PlannedEdge<'_>> {
	let mut planned = Vec::new();
	for (code, node) in index.iter() {
		let mut targets: HashSet<&str> = HashSet::new();
		for dep in node.deps.iter().filter_map(|d| Dependency::parse(d)) {
			if !targets.insert(dep.target) {
				warn!(
					"module-graph: {} lists {} more than once, keeping the first edge",
					code, dep.target
				);
				continue;
			}
			let hidden = simplify && is_implied(index, code, dep.raw);
			planned.push(PlannedEdge {
				source: code,
				dep,
				hidden,
			});
		}
	}
	if simplify {
		restore_reachability(&mut planned);
	}
	planned
}

/// Un-hide edges whose target the kept edges no longer reach.
///
/// Inside a cycle two edges can each imply the other, and hiding both would
/// cut their target off. Restoring only ever adds edges, so a single pass in
/// emission order leaves every hidden target reachable. Acyclic tables never
/// restore anything.
fn restore_reachability<'a>(planned: &mut [PlannedEdge<'a>]) {
	let mut kept: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
	for edge in planned.iter().filter(|edge| !edge.hidden) {
		kept.entry(edge.source).or_default().push(edge.dep.target);
	}
	for edge in planned.iter_mut().filter(|edge| edge.hidden) {
		if !path_exists(&kept, edge.source, edge.dep.target) {
			debug!(
				"module-graph: {} -> {} is only implied through a cycle, keeping edge",
				edge.source, edge.dep.raw
			);
			edge.hidden = false;
			kept.entry(edge.source).or_default().push(edge.dep.target);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::theme::Theme;
	use crate::graph::types::ModuleRecord;

	fn edges(elements: &[GraphElement]) -> Vec<(&str, &str, LineStyle)> {
		elements
			.iter()
			.filter_map(GraphElement::as_edge)
			.map(|e| (e.source.as_str(), e.target.as_str(), e.style))
			.collect()
	}

	#[test]
	fn nodes_are_followed_by_their_edges() {
		let index = NodeIndex::from_records(&[
			ModuleRecord::new("A", "a", [""]),
			ModuleRecord::new("B", "b", ["a"]),
		]);
		let ids: Vec<_> = generate(&index, false).iter().map(|e| e.id().to_string()).collect();
		assert_eq!(ids, vec!["a", "b", "b-a"]);
	}

	#[test]
	fn soft_marker_is_stripped_and_dashed() {
		let index = NodeIndex::from_records(&[
			ModuleRecord::new("Legacy FHIR Router", "legacy-fhir-router", [""]),
			ModuleRecord::new("FHIR Router**", "fhir-router", ["legacy-fhir-router*"]),
		]);
		let elements = generate(&index, true);
		assert_eq!(
			edges(&elements),
			vec![("fhir-router", "legacy-fhir-router", LineStyle::Dashed)]
		);
		assert_eq!(elements[2].id(), "fhir-router-legacy-fhir-router");
	}

	#[test]
	fn legacy_nodes_get_legacy_palette() {
		let index = NodeIndex::from_records(&[ModuleRecord::new("Old**", "old", ["new"])]);
		let elements = generate(&index, true);
		let node = elements[0].as_node().unwrap();
		let legacy = Theme::default().legacy;
		assert_eq!(node.name, "Old**");
		assert_eq!(node.color, legacy.color);
		assert_eq!(node.border_style, LineStyle::Dashed);
		assert_eq!(node.border_color, legacy.border_color);
	}

	#[test]
	fn dangling_targets_still_produce_edges() {
		let index = NodeIndex::from_records(&[ModuleRecord::new("C", "c", ["ghost", "*", " "])]);
		assert_eq!(edges(&generate(&index, true)), vec![("c", "ghost", LineStyle::Solid)]);
		assert_eq!(edges(&generate(&index, false)), vec![("c", "ghost", LineStyle::Solid)]);
	}

	#[test]
	fn repeated_target_keeps_first_edge() {
		let index = NodeIndex::from_records(&[
			ModuleRecord::new("A", "a", [""]),
			ModuleRecord::new("C", "c", ["a*", "a"]),
		]);
		assert_eq!(edges(&generate(&index, false)), vec![("c", "a", LineStyle::Dashed)]);
	}

	#[test]
	fn mutually_implied_edges_are_not_both_hidden() {
		let index = NodeIndex::from_records(&[
			ModuleRecord::new("A", "a", ["b", "c"]),
			ModuleRecord::new("B", "b", ["a", "c"]),
			ModuleRecord::new("C", "c", [""]),
		]);
		let ids: Vec<_> = generate(&index, true).iter().map(|e| e.id().to_string()).collect();
		assert_eq!(ids, vec!["a", "a-b", "a-c", "b", "b-a", "c"]);
	}

	#[test]
	fn cycle_feeding_a_dependent_keeps_one_entry_edge() {
		let index = NodeIndex::from_records(&[
			ModuleRecord::new("A", "a", ["b", "c"]),
			ModuleRecord::new("B", "b", ["c"]),
			ModuleRecord::new("C", "c", ["b"]),
		]);
		assert_eq!(
			edges(&generate(&index, true)),
			vec![
				("a", "b", LineStyle::Solid),
				("b", "c", LineStyle::Solid),
				("c", "b", LineStyle::Solid),
			]
		);
	}

	#[test]
	fn serializes_in_renderer_shape() {
		let index = NodeIndex::from_records(&[ModuleRecord::new("B", "b", ["a*"])]);
		let json = serde_json::to_value(generate(&index, false)).unwrap();
		assert_eq!(
			json,
			serde_json::json!([
				{
					"group": "nodes",
					"data": {
						"id": "b",
						"name": "B",
						"color": "#C4CFFD",
						"borderStyle": "solid",
						"borderColor": "#200B54"
					}
				},
				{
					"group": "edges",
					"data": { "id": "b-a", "source": "b", "target": "a", "style": "dashed" }
				}
			])
		);
	}
}
