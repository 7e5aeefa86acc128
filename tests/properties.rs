//! Property tests over generated module tables, acyclic and cyclic.

#![allow(unused_crate_dependencies)]

use std::collections::HashSet;

use module_graph::graph::{
	GraphElement, LineStyle, ModuleRecord, NodeIndex, SelectionState, Theme, generate, select,
	successors,
};
use proptest::prelude::*;

type Row = (bool, Vec<(usize, bool, bool)>, bool);

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
	prop::collection::vec(
		(
			any::<bool>(),
			prop::collection::vec((any::<usize>(), any::<bool>(), any::<bool>()), 0..5),
			any::<bool>(),
		),
		1..12,
	)
}

/// Turn generated rows into records. Targets are unique per module; some
/// dependencies are soft, padded, or point at a module that does not exist.
/// Acyclic tables let module `i` depend only on modules `0..i`; cyclic ones
/// let any module depend on any other, itself included.
fn records_from(rows: Vec<Row>, cyclic: bool) -> Vec<ModuleRecord> {
	let count = rows.len();
	rows.into_iter()
		.enumerate()
		.map(|(i, (legacy, picks, dangling))| {
			let range = if cyclic { count } else { i };
			let mut seen = HashSet::new();
			let mut deps = Vec::new();
			for (pick, soft, padded) in picks {
				if range == 0 || !seen.insert(pick % range) {
					continue;
				}
				let mut dep = format!("m{}", pick % range);
				if soft {
					dep.push('*');
				}
				if padded {
					dep = format!("  {dep} ");
				}
				deps.push(dep);
			}
			if dangling {
				deps.push(format!("ghost{i}"));
			}
			let name = if legacy {
				format!("Module {i}**")
			} else {
				format!("Module {i}")
			};
			ModuleRecord::new(name, format!(" m{i}"), deps)
		})
		.collect()
}

fn table_strategy() -> impl Strategy<Value = Vec<ModuleRecord>> {
	rows_strategy().prop_map(|rows| records_from(rows, false))
}

fn cyclic_table_strategy() -> impl Strategy<Value = Vec<ModuleRecord>> {
	rows_strategy().prop_map(|rows| records_from(rows, true))
}

fn edge_set(elements: &[GraphElement]) -> HashSet<(String, String, LineStyle)> {
	elements
		.iter()
		.filter_map(GraphElement::as_edge)
		.map(|e| (e.source.clone(), e.target.clone(), e.style))
		.collect()
}

fn node_ids(elements: &[GraphElement]) -> Vec<&str> {
	elements
		.iter()
		.filter_map(GraphElement::as_node)
		.map(|n| n.id.as_str())
		.collect()
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(128))]

	#[test]
	fn prop_generation_is_stable(records in table_strategy(), simplify in any::<bool>()) {
		let index = NodeIndex::from_records(&records);
		prop_assert_eq!(generate(&index, simplify), generate(&index, simplify));
		let rebuilt = NodeIndex::from_records(&records);
		prop_assert_eq!(generate(&index, simplify), generate(&rebuilt, simplify));
	}

	#[test]
	fn prop_reduction_is_a_subset_with_cycles(records in cyclic_table_strategy()) {
		let index = NodeIndex::from_records(&records);
		let simplified = edge_set(&generate(&index, true));
		let full = edge_set(&generate(&index, false));
		prop_assert!(simplified.is_subset(&full));
	}

	#[test]
	fn prop_reduction_is_a_subset(records in table_strategy()) {
		let index = NodeIndex::from_records(&records);
		let simplified = edge_set(&generate(&index, true));
		let full = edge_set(&generate(&index, false));
		prop_assert!(simplified.is_subset(&full));
	}

	#[test]
	fn prop_markers_are_stripped(records in table_strategy()) {
		let index = NodeIndex::from_records(&records);
		let full = edge_set(&generate(&index, false));
		for (source, target, _) in &full {
			prop_assert!(!target.ends_with('*'), "{} -> {}", source, target);
		}
		for record in &records {
			for dep in &record.dependencies {
				let dep = dep.trim();
				let (target, style) = match dep.strip_suffix('*') {
					Some(stripped) => (stripped, LineStyle::Dashed),
					None => (dep, LineStyle::Solid),
				};
				let edge = (record.code.trim().to_string(), target.to_string(), style);
				prop_assert!(full.contains(&edge), "missing {:?}", edge);
			}
		}
	}

	#[test]
	fn prop_legacy_names_get_legacy_style(records in table_strategy(), simplify in any::<bool>()) {
		let theme = Theme::default();
		let elements = generate(&NodeIndex::from_records(&records), simplify);
		for node in elements.iter().filter_map(GraphElement::as_node) {
			let expected = if node.name.ends_with("**") { theme.legacy } else { theme.active };
			prop_assert_eq!(node.color, expected.color);
			prop_assert_eq!(node.border_style, expected.border_style);
			prop_assert_eq!(node.border_color, expected.border_color);
		}
	}

	#[test]
	fn prop_selection_partitions_elements(records in table_strategy(), simplify in any::<bool>()) {
		let elements = generate(&NodeIndex::from_records(&records), simplify);
		let all: HashSet<&str> = elements.iter().map(GraphElement::id).collect();
		for id in node_ids(&elements) {
			let state = select(&elements, Some(id), &SelectionState::empty());
			let highlighted: HashSet<&str> = state.highlighted.iter().map(String::as_str).collect();
			let faded: HashSet<&str> = state.faded.iter().map(String::as_str).collect();
			prop_assert!(highlighted.is_disjoint(&faded));
			prop_assert_eq!(&highlighted | &faded, all.clone());

			let reachable = successors(&elements, id);
			for node in node_ids(&elements) {
				prop_assert_eq!(highlighted.contains(node), reachable.contains(node));
			}

			prop_assert!(select(&elements, Some(id), &state).is_empty());
		}
	}

	#[test]
	fn prop_reduction_preserves_reachability(records in table_strategy()) {
		let index = NodeIndex::from_records(&records);
		let simplified = generate(&index, true);
		let full = generate(&index, false);
		for id in node_ids(&full) {
			prop_assert_eq!(successors(&simplified, id), successors(&full, id));
		}
	}

	#[test]
	fn prop_reduction_preserves_reachability_with_cycles(records in cyclic_table_strategy()) {
		let index = NodeIndex::from_records(&records);
		let simplified = generate(&index, true);
		let full = generate(&index, false);
		for id in node_ids(&full) {
			prop_assert_eq!(successors(&simplified, id), successors(&full, id));
		}
	}

	#[test]
	fn prop_selection_partitions_cyclic_elements(records in cyclic_table_strategy()) {
		let elements = generate(&NodeIndex::from_records(&records), true);
		let all: HashSet<&str> = elements.iter().map(GraphElement::id).collect();
		for id in node_ids(&elements) {
			let state = select(&elements, Some(id), &SelectionState::empty());
			let highlighted: HashSet<&str> = state.highlighted.iter().map(String::as_str).collect();
			let faded: HashSet<&str> = state.faded.iter().map(String::as_str).collect();
			prop_assert!(highlighted.is_disjoint(&faded));
			prop_assert_eq!(&highlighted | &faded, all.clone());
		}
	}
}
