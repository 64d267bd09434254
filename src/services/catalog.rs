//! Fixed catalogue of analysis personas and methodologies.

use serde::{Deserialize, Serialize};

/// A theoretical stance an agent adopts when analysing data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
	/// Kebab-case identifier.
	pub id: String,
	/// Display name; adopted by agents that take the persona.
	pub name: String,
	/// One-line summary.
	pub description: String,
	/// Short characteristic phrases.
	pub traits: Vec<String>,
	/// Avatar image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
}

/// A qualitative-analysis method an agent can pin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Methodology {
	/// Kebab-case identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// One-line summary.
	pub description: String,
}

const PERSONAS: &[(&str, &str, &str, [&str; 3])] = &[
	(
		"critical-theorist",
		"Critical Theorist",
		"Examines power structures and societal influences in the data",
		["Critical", "Analytical", "Questioning"],
	),
	(
		"methodological-pragmatist",
		"Methodological Pragmatist",
		"Focuses on practical implications and actionable insights",
		["Practical", "Results-oriented", "Systematic"],
	),
	(
		"interpretive-phenomenologist",
		"Interpretive Phenomenologist",
		"Explores lived experiences and subjective perspectives",
		["Empathetic", "Reflective", "Detail-oriented"],
	),
	(
		"constructivist",
		"Constructivist",
		"Examines how meaning is constructed through social interaction",
		["Contextual", "Relational", "Process-focused"],
	),
	(
		"post-positivist",
		"Post-Positivist",
		"Balances objectivity with recognition of research limitations",
		["Objective", "Rigorous", "Cautious"],
	),
];

const METHODOLOGIES: &[(&str, &str, &str)] = &[
	(
		"grounded-theory",
		"Grounded Theory",
		"Develops theory through systematic data analysis",
	),
	(
		"phenomenology",
		"Phenomenology",
		"Explores lived experiences and subjective perspectives",
	),
	(
		"discourse-analysis",
		"Discourse Analysis",
		"Examines language use and communication patterns",
	),
	(
		"narrative-analysis",
		"Narrative Analysis",
		"Focuses on stories and how they shape understanding",
	),
	(
		"case-study",
		"Case Study",
		"In-depth examination of specific instances or examples",
	),
	(
		"content-analysis",
		"Content Analysis",
		"Systematic classification and counting of text",
	),
	(
		"thematic-analysis",
		"Thematic Analysis",
		"Identifies and analyzes patterns in qualitative data",
	),
	(
		"ethnography",
		"Ethnography",
		"Studies cultures and social interactions",
	),
];

/// Every persona, in catalogue order.
pub fn personas() -> Vec<Persona> {
	PERSONAS
		.iter()
		.map(|(id, name, description, traits)| Persona {
			id: id.to_string(),
			name: name.to_string(),
			description: description.to_string(),
			traits: traits.iter().map(|t| t.to_string()).collect(),
			avatar: None,
		})
		.collect()
}

/// Every methodology, in catalogue order.
pub fn methodologies() -> Vec<Methodology> {
	METHODOLOGIES
		.iter()
		.map(|(id, name, description)| Methodology {
			id: id.to_string(),
			name: name.to_string(),
			description: description.to_string(),
		})
		.collect()
}

/// Persona with the given id.
pub fn find_persona(id: &str) -> Option<Persona> {
	personas().into_iter().find(|p| p.id == id)
}

/// Whether the catalogue lists methodology `id`.
pub fn has_methodology(id: &str) -> bool {
	METHODOLOGIES.iter().any(|(m, _, _)| *m == id)
}
