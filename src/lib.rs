//! module-graph: dependency graph model for module tables.
//!
//! This crate turns a table of modules (name, code, description, dependency
//! codes) into styled node and edge elements for an interactive renderer,
//! optionally hiding dependency edges implied by other edges, and computes the
//! highlight partition when a node is clicked. The renderer itself lives on
//! the JavaScript side and talks to this crate through [`bindings`].

use log::{Level, info};
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod error;
pub mod graph;

pub use bindings::{GraphSession, elements_json};
pub use error::{GraphError, Result};
pub use graph::{
	GraphBuild, GraphElement, GraphOptions, ModuleRecord, NodeIndex, SelectionState, build,
	generate, select,
};

/// Initialize logging and panic hooks for the WASM target.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("module-graph: logging initialized");
}
