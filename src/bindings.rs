//! JavaScript-facing boundary for the renderer.
//!
//! Everything crosses as JSON strings: module records in, elements,
//! diagnostics and selections out. The renderer forwards node clicks (or
//! `undefined` for a click on empty space) to [`GraphSession::click`] and
//! toggles the `selected`/`faded` classes from the returned partition.

use log::info;
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::graph::{
	GraphBuild, GraphOptions, ModuleRecord, SelectionState, build, sample_records, select,
};

/// Decode records and return the element list as JSON.
pub fn elements_json(records_json: &str, simplify: bool) -> Result<String> {
	let records: Vec<ModuleRecord> = serde_json::from_str(records_json)?;
	let graph = build(&records, &GraphOptions::simplified(simplify))?;
	Ok(serde_json::to_string(&graph.elements)?)
}

/// One-shot element generation for hosts that manage selection themselves.
#[wasm_bindgen(js_name = graphElements)]
pub fn graph_elements(records_json: &str, simplify: bool) -> std::result::Result<String, JsError> {
	Ok(elements_json(records_json, simplify)?)
}

/// A module table together with its current elements and selection.
#[wasm_bindgen]
pub struct GraphSession {
	records: Vec<ModuleRecord>,
	options: GraphOptions,
	graph: GraphBuild,
	selection: SelectionState,
}

impl GraphSession {
	/// Build a session over already decoded records.
	pub fn from_records(records: Vec<ModuleRecord>, options: GraphOptions) -> Result<Self> {
		let graph = build(&records, &options)?;
		Ok(Self {
			records,
			options,
			graph,
			selection: SelectionState::empty(),
		})
	}

	/// Decode records and optional options from JSON.
	pub fn from_json(records_json: &str, options_json: Option<&str>) -> Result<Self> {
		let records = serde_json::from_str(records_json)?;
		let options = match options_json {
			Some(json) => serde_json::from_str(json)?,
			None => GraphOptions::default(),
		};
		Self::from_records(records, options)
	}

	/// Current elements and diagnostics.
	pub fn graph(&self) -> &GraphBuild {
		&self.graph
	}

	/// Current selection.
	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	/// Regenerate with a new simplify flag. The selection is cleared since
	/// the element set changes underneath it.
	pub fn regenerate(&mut self, simplify: bool) -> Result<()> {
		self.options.simplify = simplify;
		self.graph = build(&self.records, &self.options)?;
		self.selection = SelectionState::empty();
		Ok(())
	}

	/// Apply a click; `None` is a click on empty space.
	pub fn apply_click(&mut self, node_id: Option<&str>) -> &SelectionState {
		self.selection = select(&self.graph.elements, node_id, &self.selection);
		if let Some(id) = &self.selection.selected_node_id {
			info!("module-graph: selected {}", id);
		}
		&self.selection
	}
}

#[wasm_bindgen]
impl GraphSession {
	/// Decode records and optional options from JSON.
	#[wasm_bindgen(constructor)]
	pub fn new(
		records_json: &str,
		options_json: Option<String>,
	) -> std::result::Result<GraphSession, JsError> {
		Ok(Self::from_json(records_json, options_json.as_deref())?)
	}

	/// Session over the built-in sample table.
	pub fn sample() -> std::result::Result<GraphSession, JsError> {
		Ok(Self::from_records(sample_records(), GraphOptions::default())?)
	}

	/// Current elements as JSON.
	pub fn elements(&self) -> std::result::Result<String, JsError> {
		Ok(serde_json::to_string(&self.graph.elements)?)
	}

	/// Current diagnostics as JSON.
	pub fn diagnostics(&self) -> std::result::Result<String, JsError> {
		Ok(serde_json::to_string(&self.graph.diagnostics)?)
	}

	/// Regenerate with a new simplify flag, clearing the selection.
	#[wasm_bindgen(js_name = setSimplify)]
	pub fn set_simplify(&mut self, simplify: bool) -> std::result::Result<(), JsError> {
		Ok(self.regenerate(simplify)?)
	}

	/// Forward a click and return the new selection as JSON.
	pub fn click(&mut self, node_id: Option<String>) -> std::result::Result<String, JsError> {
		let selection = self.apply_click(node_id.as_deref());
		Ok(serde_json::to_string(selection)?)
	}
}
