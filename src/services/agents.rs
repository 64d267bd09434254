//! Agent profiles and the edits the customization screen makes to them.

use serde::{Deserialize, Serialize};

use super::catalog::Persona;

/// What an agent is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
	/// Waiting for work.
	#[default]
	Idle,
	/// Processing project data.
	Analyzing,
	/// Finished its last run.
	Complete,
	/// Its last run failed.
	Error,
}

/// A research agent as the dashboard sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
	/// Unique id, `custom-<n>` for agents created here.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Agent type, serialized as `type`.
	#[serde(rename = "type")]
	pub kind: String,
	/// One-line summary shown under the name.
	pub description: String,
	/// Model identifier.
	pub model: String,
	/// Sampling temperature.
	pub temperature: f64,
	/// Response length cap.
	pub max_tokens: u32,
	/// Whether the agent takes part in analysis.
	pub is_active: bool,
	/// Whether other users can see the agent.
	pub is_public: bool,
	/// Current activity.
	pub status: AgentStatus,
	/// Insights produced so far.
	pub insights: Vec<String>,
	/// Custom system prompt.
	#[serde(default)]
	pub prompt: Option<String>,
	/// Adopted theoretical stance.
	#[serde(default)]
	pub persona: Option<Persona>,
	/// Methodology the agent currently applies.
	#[serde(default)]
	pub methodology: Option<String>,
	/// Pinned methodology ids, in pin order, without duplicates.
	#[serde(default)]
	pub pinned_methodologies: Vec<String>,
}

impl AgentProfile {
	/// Default profile every new or unknown agent starts from.
	pub fn base(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: "Custom Agent".to_string(),
			kind: "custom".to_string(),
			description: "A customizable research agent".to_string(),
			model: "gpt-3.5-turbo".to_string(),
			temperature: 0.7,
			max_tokens: 200,
			is_active: true,
			is_public: false,
			status: AgentStatus::Idle,
			insights: Vec::new(),
			prompt: None,
			persona: None,
			methodology: None,
			pinned_methodologies: Vec::new(),
		}
	}

	/// Adopts the persona and its name.
	pub fn assign_persona(&mut self, persona: Persona) {
		self.name = persona.name.clone();
		self.persona = Some(persona);
	}

	/// Makes `methodology_id` the active methodology and pins it once.
	pub fn pin(&mut self, methodology_id: &str) {
		self.methodology = Some(methodology_id.to_string());
		if !self.pinned_methodologies.iter().any(|m| m == methodology_id) {
			self.pinned_methodologies.push(methodology_id.to_string());
		}
	}

	/// Unpins `methodology_id`, clearing it as the active one if it was.
	pub fn unpin(&mut self, methodology_id: &str) {
		self.pinned_methodologies.retain(|m| m != methodology_id);
		if self.methodology.as_deref() == Some(methodology_id) {
			self.methodology = None;
		}
	}
}

/// Partial agent for creating a custom agent. Absent fields keep base values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentDraft {
	/// Requested id; the backend assigns one when absent.
	pub id: Option<String>,
	/// See [`AgentProfile::name`].
	pub name: Option<String>,
	/// See [`AgentProfile::kind`].
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// See [`AgentProfile::description`].
	pub description: Option<String>,
	/// See [`AgentProfile::model`].
	pub model: Option<String>,
	/// See [`AgentProfile::temperature`].
	pub temperature: Option<f64>,
	/// See [`AgentProfile::max_tokens`].
	pub max_tokens: Option<u32>,
	/// See [`AgentProfile::is_public`].
	pub is_public: Option<bool>,
	/// See [`AgentProfile::prompt`].
	pub prompt: Option<String>,
}

impl AgentDraft {
	/// Overlays the fields present in the draft onto `base`.
	pub fn apply(self, mut base: AgentProfile) -> AgentProfile {
		if let Some(id) = self.id {
			base.id = id;
		}
		if let Some(name) = self.name {
			base.name = name;
		}
		if let Some(kind) = self.kind {
			base.kind = kind;
		}
		if let Some(description) = self.description {
			base.description = description;
		}
		if let Some(model) = self.model {
			base.model = model;
		}
		if let Some(temperature) = self.temperature {
			base.temperature = temperature;
		}
		if let Some(max_tokens) = self.max_tokens {
			base.max_tokens = max_tokens;
		}
		if let Some(is_public) = self.is_public {
			base.is_public = is_public;
		}
		if self.prompt.is_some() {
			base.prompt = self.prompt;
		}
		base
	}
}
