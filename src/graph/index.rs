//! Keyed node index built from a module table.

use indexmap::{IndexMap, IndexSet};
use log::warn;
use serde::{Deserialize, Serialize};

use super::types::{ModuleRecord, ModuleStatus};
use crate::error::{GraphError, Result};

/// What to do when two records share a trimmed code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
	/// Later record replaces the earlier one in place. Logged at warn level.
	#[default]
	Overwrite,
	/// Later name and description win, dependency sets are unioned.
	Merge,
	/// Fail the build with [`GraphError::DuplicateCode`].
	Reject,
}

/// A module as stored in the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedNode {
	/// Display name, legacy marker included.
	pub name: String,
	/// Free text carried through from the record.
	pub description: String,
	/// Parsed from the name suffix.
	pub status: ModuleStatus,
	/// Trimmed raw dependency strings, soft markers kept.
	pub deps: IndexSet<String>,
}

/// Immutable mapping from trimmed code to node, in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct NodeIndex {
	nodes: IndexMap<String, IndexedNode>,
	duplicates: Vec<String>,
}

impl NodeIndex {
	/// Build with the default [`DuplicatePolicy::Overwrite`].
	pub fn from_records(records: &[ModuleRecord]) -> Self {
		let mut index = Self::default();
		for record in records {
			// Overwrite never rejects.
			let _ = index.insert(record, DuplicatePolicy::Overwrite);
		}
		index
	}

	/// Build with an explicit duplicate policy.
	pub fn build(records: &[ModuleRecord], policy: DuplicatePolicy) -> Result<Self> {
		let mut index = Self::default();
		for record in records {
			index.insert(record, policy)?;
		}
		Ok(index)
	}

	fn insert(&mut self, record: &ModuleRecord, policy: DuplicatePolicy) -> Result<()> {
		let code = record.code.trim().to_string();
		let node = IndexedNode {
			name: record.name.clone(),
			description: record.description.clone(),
			status: ModuleStatus::from_name(&record.name),
			deps: record.dependencies.iter().map(|d| d.trim().to_string()).collect(),
		};

		let Some(existing) = self.nodes.get_mut(&code) else {
			self.nodes.insert(code, node);
			return Ok(());
		};

		match policy {
			DuplicatePolicy::Reject => return Err(GraphError::DuplicateCode { code }),
			DuplicatePolicy::Overwrite => {
				warn!("module-graph: duplicate code '{}', later record overwrites", code);
				*existing = node;
			}
			DuplicatePolicy::Merge => {
				warn!("module-graph: duplicate code '{}', merging records", code);
				existing.name = node.name;
				existing.description = node.description;
				existing.status = node.status;
				existing.deps.extend(node.deps);
			}
		}
		if !self.duplicates.contains(&code) {
			self.duplicates.push(code);
		}
		Ok(())
	}

	/// Node for a trimmed code.
	pub fn get(&self, code: &str) -> Option<&IndexedNode> {
		self.nodes.get(code)
	}

	/// Whether a module with this code exists.
	pub fn contains(&self, code: &str) -> bool {
		self.nodes.contains_key(code)
	}

	/// Number of distinct codes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True for an empty table.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Nodes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexedNode)> {
		self.nodes.iter().map(|(code, node)| (code.as_str(), node))
	}

	/// Position of a code in insertion order.
	pub fn position(&self, code: &str) -> Option<usize> {
		self.nodes.get_index_of(code)
	}

	/// Codes that appeared more than once, in order of first repeat.
	pub fn duplicates(&self) -> &[String] {
		&self.duplicates
	}
}
