//! Module table input and the typed attributes parsed from it.
//!
//! The input collaborator encodes two attributes as string suffixes: a module
//! name ending in `**` marks a legacy module, and a dependency ending in `*`
//! marks a soft dependency. Both are parsed here once so the rest of the crate
//! works with [`ModuleStatus`] and [`DependencyKind`] instead of suffixes.

use serde::{Deserialize, Serialize};

/// Suffix on a module name marking a legacy/transitional module.
pub const LEGACY_MARKER: &str = "**";

/// Suffix on a dependency string marking a soft/optional dependency.
pub const SOFT_MARKER: char = '*';

/// One row of the module table, as extracted by the input collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
	/// Display name. May end in `**` for legacy modules.
	pub name: String,
	/// Identifier used as the node id once trimmed.
	pub code: String,
	/// Free text, carried through untouched.
	#[serde(default)]
	pub description: String,
	/// Raw dependency codes, possibly padded and possibly `*`-suffixed.
	#[serde(default)]
	pub dependencies: Vec<String>,
}

impl ModuleRecord {
	/// Convenience constructor used by hosts and tests.
	pub fn new(
		name: impl Into<String>,
		code: impl Into<String>,
		dependencies: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			name: name.into(),
			code: code.into(),
			description: String::new(),
			dependencies: dependencies.into_iter().map(Into::into).collect(),
		}
	}

	/// Attach a description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// Lifecycle status of a module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
	/// Regular, maintained module.
	#[default]
	Active,
	/// Legacy or transitional module (`**` name suffix).
	Legacy,
}

impl ModuleStatus {
	/// Status encoded by a display name. The name itself is left untouched.
	pub fn from_name(name: &str) -> Self {
		if name.ends_with(LEGACY_MARKER) {
			Self::Legacy
		} else {
			Self::Active
		}
	}
}

/// Strength of a dependency edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
	/// Required dependency, drawn solid.
	Hard,
	/// Optional dependency (`*` suffix), drawn dashed.
	Soft,
}

/// A dependency string split into its real target and kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency<'a> {
	/// The trimmed string as the node index stores it, marker included.
	pub raw: &'a str,
	/// Target module code with the marker removed.
	pub target: &'a str,
	/// Hard or soft.
	pub kind: DependencyKind,
}

impl<'a> Dependency<'a> {
	/// Parse a dependency string.
	///
	/// Returns `None` for strings that are empty after trimming or made up of
	/// marker characters only; those never become edges.
	pub fn parse(raw: &'a str) -> Option<Self> {
		let raw = raw.trim();
		if raw.trim_end_matches(SOFT_MARKER).is_empty() {
			return None;
		}
		let (target, kind) = match raw.strip_suffix(SOFT_MARKER) {
			Some(stripped) => (stripped, DependencyKind::Soft),
			None => (raw, DependencyKind::Hard),
		};
		Some(Self { raw, target, kind })
	}
}
