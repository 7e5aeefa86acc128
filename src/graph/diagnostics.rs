//! Non-fatal findings about a module table.

use log::warn;
use serde::Serialize;

use super::index::NodeIndex;
use super::reach::find_cycles;
use super::types::Dependency;

/// A dependency naming no module in the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
	/// Module listing the dependency.
	pub source: String,
	/// Target code with any soft marker stripped.
	pub target: String,
}

/// Everything the build degraded around instead of failing on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
	/// Codes that appeared on more than one record.
	pub duplicates: Vec<String>,
	/// Dependencies naming no module.
	pub dangling: Vec<DanglingReference>,
	/// Dependency cycles, each in index order.
	pub cycles: Vec<Vec<String>>,
}

impl Diagnostics {
	/// Gather findings for an index, logging each at warn level.
	pub fn collect(index: &NodeIndex) -> Self {
		let dangling: Vec<DanglingReference> = index
			.iter()
			.flat_map(|(code, node)| {
				node.deps
					.iter()
					.filter_map(|d| Dependency::parse(d))
					.filter(move |dep| !index.contains(dep.target))
					.map(move |dep| DanglingReference {
						source: code.to_string(),
						target: dep.target.to_string(),
					})
			})
			.collect();
		for reference in &dangling {
			warn!(
				"module-graph: {} depends on unknown module {}",
				reference.source, reference.target
			);
		}

		let cycles = find_cycles(index);
		for cycle in &cycles {
			warn!("module-graph: dependency cycle through {}", cycle.join(", "));
		}

		Self {
			duplicates: index.duplicates().to_vec(),
			dangling,
			cycles,
		}
	}

	/// True when there is nothing to report.
	pub fn is_clean(&self) -> bool {
		self.duplicates.is_empty() && self.dangling.is_empty() && self.cycles.is_empty()
	}
}
