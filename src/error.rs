//! Error types for graph construction.

use thiserror::Error;

/// Errors that can stop a graph build.
///
/// Malformed but well-typed module tables never error: dangling references,
/// cycles and stray markers degrade the visualization instead.
#[derive(Debug, Error)]
pub enum GraphError {
	/// Two records share a code and the duplicate policy rejects that.
	#[error("duplicate module code '{code}'")]
	DuplicateCode {
		/// The trimmed code that appeared more than once.
		code: String,
	},

	/// JSON at the host boundary could not be decoded or encoded.
	#[error("invalid module graph JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
