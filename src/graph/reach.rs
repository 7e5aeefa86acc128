//! Reachability over the node index.
//!
//! [`is_implied`] decides whether an explicit dependency is already reachable
//! through the other dependencies of the same module, which is what simplify
//! mode uses to pick edges to hide. [`path_exists`] checks the edges that
//! survive, and [`find_cycles`] reports dependency cycles so they can be
//! surfaced instead of looping forever.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex as GraphIdx};

use super::index::NodeIndex;
use super::types::Dependency;

/// Whether `dependency` of `source` is implied by another dependency of `source`.
///
/// The walk follows raw dependency strings exactly as the index stores them,
/// so a soft dependency `x*` looks up a module coded `x*` and finds none: soft
/// dependencies end their branch and never carry reachability. Likewise, a
/// soft dependency is only implied when some reachable module lists the same
/// `x*` string. Unknown codes end their branch. `source` itself is never
/// re-entered, so paths that loop back through it imply nothing. Other
/// dependencies naming the same target (`x` next to `x*`) are not walked.
pub fn is_implied(index: &NodeIndex, source: &str, dependency: &str) -> bool {
	let Some(node) = index.get(source) else {
		return false;
	};
	let Some(target) = Dependency::parse(dependency).map(|dep| dep.target) else {
		return false;
	};

	let mut visited: HashSet<&str> = HashSet::from([source]);
	let mut stack: Vec<&str> = node
		.deps
		.iter()
		.map(String::as_str)
		.filter(|d| Dependency::parse(d).is_some_and(|dep| dep.target != target))
		.collect();
	// Keep depth-first order matching the dependency set order.
	stack.reverse();

	while let Some(code) = stack.pop() {
		if !visited.insert(code) {
			continue;
		}
		let Some(next) = index.get(code) else {
			continue;
		};
		if next.deps.contains(dependency) {
			return true;
		}
		let before = stack.len();
		stack.extend(next.deps.iter().map(String::as_str).filter(|d| !d.is_empty()));
		stack[before..].reverse();
	}
	false
}

/// Whether `to` can be reached from `from` along resolved `edges`.
///
/// Breadth-first with a visited set, so cyclic edge sets terminate. A node
/// always reaches itself.
pub fn path_exists<'a>(edges: &HashMap<&'a str, Vec<&'a str>>, from: &'a str, to: &str) -> bool {
	let mut visited: HashSet<&str> = HashSet::from([from]);
	let mut queue: VecDeque<&str> = VecDeque::from([from]);
	while let Some(code) = queue.pop_front() {
		if code == to {
			return true;
		}
		for &next in edges.get(code).into_iter().flatten() {
			if visited.insert(next) {
				queue.push_back(next);
			}
		}
	}
	false
}

/// Dependency cycles among existing modules, each listed in index order.
///
/// Edges are resolved with markers stripped, so soft dependencies take part.
/// Self-dependencies count as cycles of one.
pub fn find_cycles(index: &NodeIndex) -> Vec<Vec<String>> {
	let mut graph: DiGraph<&str, ()> = DiGraph::new();
	let mut ids: HashMap<&str, GraphIdx> = HashMap::new();
	for (code, _) in index.iter() {
		ids.insert(code, graph.add_node(code));
	}
	for (code, node) in index.iter() {
		for dep in node.deps.iter().filter_map(|d| Dependency::parse(d)) {
			if let Some(&target) = ids.get(dep.target) {
				graph.update_edge(ids[code], target, ());
			}
		}
	}

	let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
		.into_iter()
		.filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
		.map(|scc| {
			let mut members: Vec<&str> = scc.into_iter().map(|idx| graph[idx]).collect();
			members.sort_by_key(|code| index.position(code));
			members.into_iter().map(str::to_string).collect()
		})
		.collect();
	cycles.sort_by_key(|cycle| cycle.first().and_then(|code| index.position(code)));
	cycles
}
