//! Click selection and the highlight/fade partition.
//!
//! Selection is a pure function of the element list, the clicked node and the
//! previous selection. It is recomputed wholesale on every click. Successors
//! come from edge elements only, so the full and the simplified edge sets
//! highlight the same nodes.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;
use serde::Serialize;

use super::elements::GraphElement;

/// Renderer class for highlighted elements.
pub const SELECTED_CLASS: &str = "selected";
/// Renderer class for everything else while a node is selected.
pub const FADED_CLASS: &str = "faded";

/// Current selection. Empty means nothing is selected and nothing is faded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
	/// The clicked node, if any.
	pub selected_node_id: Option<String>,
	/// Selected node, its successors and the edges between them, in element order.
	pub highlighted: IndexSet<String>,
	/// Every other element id, in element order.
	pub faded: IndexSet<String>,
}

impl SelectionState {
	/// Nothing selected.
	pub fn empty() -> Self {
		Self::default()
	}

	/// True when no node is selected.
	pub fn is_empty(&self) -> bool {
		self.selected_node_id.is_none()
	}

	/// Class the renderer should apply to an element, if any.
	pub fn class_for(&self, id: &str) -> Option<&'static str> {
		if self.highlighted.contains(id) {
			Some(SELECTED_CLASS)
		} else if self.faded.contains(id) {
			Some(FADED_CLASS)
		} else {
			None
		}
	}
}

/// Apply a click to the current selection.
///
/// `clicked` is `None` for a click on empty space. Clicking empty space, an
/// id that names no node element, or the already selected node clears the
/// selection.
pub fn select(
	elements: &[GraphElement],
	clicked: Option<&str>,
	previous: &SelectionState,
) -> SelectionState {
	let Some(clicked) = clicked else {
		return SelectionState::empty();
	};
	if previous.selected_node_id.as_deref() == Some(clicked) {
		return SelectionState::empty();
	}
	let is_node = elements
		.iter()
		.filter_map(GraphElement::as_node)
		.any(|node| node.id == clicked);
	if !is_node {
		return SelectionState::empty();
	}

	let reachable = successors(elements, clicked);
	let (highlighted, faded): (Vec<&GraphElement>, Vec<&GraphElement>) =
		elements.iter().partition(|element| match element {
			GraphElement::Node(node) => reachable.contains(node.id.as_str()),
			GraphElement::Edge(edge) => reachable.contains(edge.source.as_str()),
		});

	SelectionState {
		selected_node_id: Some(clicked.to_string()),
		highlighted: highlighted.into_iter().map(|e| e.id().to_string()).collect(),
		faded: faded.into_iter().map(|e| e.id().to_string()).collect(),
	}
}

/// Node ids reachable from `start` along edge elements, `start` included.
///
/// Dangling edge targets are included even though no node element carries
/// them.
pub fn successors<'a>(elements: &'a [GraphElement], start: &'a str) -> HashSet<&'a str> {
	let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
	for edge in elements.iter().filter_map(GraphElement::as_edge) {
		adjacency
			.entry(edge.source.as_str())
			.or_default()
			.push(edge.target.as_str());
	}

	let mut visited = HashSet::from([start]);
	let mut queue = VecDeque::from([start]);
	while let Some(id) = queue.pop_front() {
		for &next in adjacency.get(id).into_iter().flatten() {
			if visited.insert(next) {
				queue.push_back(next);
			}
		}
	}
	visited
}
