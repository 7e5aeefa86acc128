//! Per-call graph generation options.

use serde::{Deserialize, Serialize};

use super::index::DuplicatePolicy;
use super::theme::Theme;

/// Options supplied by the host on every regeneration. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphOptions {
	/// Hide edges implied by other dependencies of the same module.
	pub simplify: bool,
	/// Conflict policy for repeated codes.
	pub duplicates: DuplicatePolicy,
	/// Node palettes.
	pub theme: Theme,
}

impl GraphOptions {
	/// Defaults with an explicit simplify flag.
	pub fn simplified(simplify: bool) -> Self {
		Self {
			simplify,
			..Self::default()
		}
	}
}

impl Default for GraphOptions {
	fn default() -> Self {
		Self {
			simplify: true,
			duplicates: DuplicatePolicy::default(),
			theme: Theme::default(),
		}
	}
}
