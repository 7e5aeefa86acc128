//! Built-in module table for hosts running without a remote content source.

use super::types::ModuleRecord;

/// A small FHIR-centred module table exercising soft dependencies, legacy
/// modules and redundant transitive dependencies.
pub fn sample_records() -> Vec<ModuleRecord> {
	vec![
		ModuleRecord::new("Legacy FHIR Router", "legacy-fhir-router", [""]).with_description(
			"Version of the FHIR Router used to communicate with a monolithic instance of the Cloud Healthcare API",
		),
		ModuleRecord::new("FHIR Router**", "fhir-router", ["legacy-fhir-router*"]).with_description(
			"New version of the FHIR router that enables the use of League FHIR Modules",
		),
		ModuleRecord::new("Health Activity Manager**", "ham", ["legacy-fhir-router"])
			.with_description("Module used to keep track of tasks through the use of observations"),
		ModuleRecord::new("Health Journey Personalizer", "hjp", ["legacy-fhir-router", "ham"])
			.with_description("Module used to personalize user journeys"),
		ModuleRecord::new(
			"Dynamic Campaigns",
			"dyn-campaigns",
			["legacy-fhir-router", "hjp", "ham"],
		)
		.with_description("Module that surfaces dynamic campaigns to users"),
		ModuleRecord::new(
			"Challenges",
			"challenges",
			["legacy-fhir-router", "hjp", "ham", "dyn-campaigns"],
		)
		.with_description("Module that starts and manages activity challenges for users and teams"),
	]
}
